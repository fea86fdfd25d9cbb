//! # Stockbook Architecture
//!
//! Stockbook is a single-user stock tracker: an ordered, in-memory list of items
//! that is mirrored to a JSON **working** snapshot on every change and can be
//! checkpointed to (and restored from) a **main** snapshot on request.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, argument parsing, prompting, colored output   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per menu action                               │
//! │  - Returns CmdResult (data + messages), never prints        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory (inventory.rs)                                   │
//! │  - Owns the item list, write-through to the working store   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait + JSON codec                         │
//! │  - FileStore (production), MemStore (testing)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Money
//!
//! Prices and totals are [`rust_decimal::Decimal`]. Nothing touches binary
//! floating point, so `100 × 0.05 + 50 × 0.10` is exactly `10.00`.
//!
//! ## Module Overview
//!
//! - [`model`]: `Item` and currency formatting
//! - [`inventory`]: the `Inventory` collection
//! - [`store`]: snapshot port and implementations
//! - [`commands`]: per-action logic returning `CmdResult`
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
