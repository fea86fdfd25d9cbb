//! # Snapshot Storage
//!
//! An inventory keeps two persisted copies of its collection: the **working**
//! snapshot, rewritten after every mutation, and the **main** snapshot, written
//! and read only when the user asks for it. Both go through the same port, the
//! [`SnapshotStore`] trait, so the core never knows whether it is talking to a
//! file, a database row, or a test double.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per snapshot, replaced atomically on write.
//! - [`memory::MemStore`]: in-memory document for tests; can simulate write
//!   failures and hold arbitrary (including corrupt) content.
//!
//! ## Document Format
//!
//! A snapshot is a UTF-8 JSON array of item records, in collection order:
//!
//! ```text
//! [
//!   { "identifier": 1, "name": "Bolt", "quantity": 100, "price": "0.05" },
//!   { "identifier": 2, "name": "Nut", "quantity": 50, "price": "0.10" }
//! ]
//! ```
//!
//! Prices are written as strings so they round-trip exactly. Numbers are
//! accepted on read.
//!
//! ## Missing vs Corrupt
//!
//! A location that has never been written reads as `Ok(None)` and the caller
//! treats it as an empty collection. A location that exists but does not decode
//! is an error; nothing is silently replaced with an empty list.

use crate::error::{PersistenceError, Result, StockbookError};
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Port for one durable snapshot location.
///
/// Implementors only move whole documents; encoding and validation live in the
/// provided `load`/`save` methods.
pub trait SnapshotStore {
    /// Human-readable locator used in logs and error messages.
    fn location(&self) -> String;

    /// Read the whole document.
    /// Returns Ok(None) if nothing has been stored at this location yet.
    fn read(&self) -> std::result::Result<Option<String>, PersistenceError>;

    /// Replace the whole document.
    fn write(&self, document: &str) -> std::result::Result<(), PersistenceError>;

    /// Load and decode the collection. `None` means the location is absent.
    fn load(&self) -> Result<Option<Vec<Item>>> {
        let location = self.location();
        let document = match self.read() {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::debug!(%location, "snapshot absent");
                return Ok(None);
            }
            Err(e) => return Err(StockbookError::persistence(location, e)),
        };
        let items = decode(&document).map_err(|e| StockbookError::persistence(&location, e))?;
        tracing::debug!(%location, count = items.len(), "snapshot loaded");
        Ok(Some(items))
    }

    /// Encode and overwrite the collection.
    fn save(&self, items: &[Item]) -> Result<()> {
        let location = self.location();
        let document = encode(items).map_err(|e| StockbookError::persistence(&location, e))?;
        self.write(&document)
            .map_err(|e| StockbookError::persistence(&location, e))?;
        tracing::debug!(%location, count = items.len(), "snapshot written");
        Ok(())
    }
}

pub fn encode(items: &[Item]) -> std::result::Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(items)?)
}

pub fn decode(document: &str) -> std::result::Result<Vec<Item>, PersistenceError> {
    let items: Vec<Item> = serde_json::from_str(document)?;
    // quantity is unsigned, so serde already rejects negatives there
    if let Some(bad) = items
        .iter()
        .find(|item| item.price.is_sign_negative() && !item.price.is_zero())
    {
        return Err(PersistenceError::InvalidRecord(format!(
            "item {} has negative price {}",
            bad.identifier, bad.price
        )));
    }
    Ok(items)
}
