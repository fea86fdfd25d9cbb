//! # Inventory
//!
//! [`Inventory`] owns the ordered item collection and the two snapshot ports.
//!
//! ## Write-Through
//!
//! Every mutation (`add`, `remove`, `update_quantity`) changes the in-memory
//! collection first and then rewrites the working snapshot. If that write
//! fails the change stays applied in memory and the persistence error is
//! returned, so callers can tell "the operation failed" from "the operation
//! happened but could not be saved" (see [`StockbookError::is_persistence`]).
//!
//! ## Duplicate Identifiers
//!
//! `add` does not reject an identifier that is already present. Lookup, removal
//! and quantity updates always resolve to the first match in insertion order.

use crate::error::{Result, StockbookError};
use crate::model::Item;
use crate::store::SnapshotStore;
use rust_decimal::Decimal;

pub struct Inventory<S: SnapshotStore> {
    items: Vec<Item>,
    main: S,
    working: S,
}

impl<S: SnapshotStore> Inventory<S> {
    /// Bind both snapshot locations and hydrate from the working snapshot.
    ///
    /// An absent working snapshot starts the inventory empty; a corrupt one is
    /// an error.
    pub fn open(main: S, working: S) -> Result<Self> {
        let items = working.load()?.unwrap_or_default();
        tracing::info!(
            working = %working.location(),
            count = items.len(),
            "inventory hydrated"
        );
        Ok(Self {
            items,
            main,
            working,
        })
    }

    /// Append an item and persist the working snapshot.
    ///
    /// Returns whether the identifier was already present.
    pub fn add(&mut self, item: Item) -> Result<bool> {
        let duplicate = self.position(item.identifier).is_some();
        if duplicate {
            tracing::warn!(id = item.identifier, "adding item with duplicate identifier");
        }
        self.items.push(item);
        self.persist_working()?;
        Ok(duplicate)
    }

    /// Remove the first item with `id`. Nothing is written if it is absent.
    pub fn remove(&mut self, id: i64) -> Result<Item> {
        let pos = self.position(id).ok_or(StockbookError::NotFound(id))?;
        let removed = self.items.remove(pos);
        self.persist_working()?;
        Ok(removed)
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.identifier == id)
    }

    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ quantity × price, in exact decimal arithmetic.
    ///
    /// Values too large for a `Decimal` are an error rather than a panic.
    pub fn total_value(&self) -> Result<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            total
                .checked_add(item.value()?)
                .ok_or(StockbookError::TotalValueOverflow)
        })
    }

    /// Set the quantity of the first item with `id` and persist the working snapshot.
    ///
    /// A negative quantity fails before anything is mutated or written.
    pub fn update_quantity(&mut self, id: i64, new_quantity: i64) -> Result<&Item> {
        let pos = self.position(id).ok_or(StockbookError::NotFound(id))?;
        self.items[pos].set_quantity(new_quantity)?;
        self.persist_working()?;
        Ok(&self.items[pos])
    }

    /// Overwrite the main snapshot with the current collection.
    pub fn persist_to_main(&self) -> Result<()> {
        self.main.save(&self.items)?;
        tracing::info!(main = %self.main.location(), count = self.items.len(), "saved to main");
        Ok(())
    }

    /// Replace the collection with the main snapshot (empty if absent) and
    /// rewrite the working snapshot to match.
    ///
    /// A corrupt main snapshot is an error and leaves both the collection and
    /// the working snapshot untouched.
    pub fn restore_from_main(&mut self) -> Result<()> {
        self.reload_from_main()?;
        self.persist_working()
    }

    /// First half of [`restore_from_main`](Self::restore_from_main): replace the
    /// in-memory collection only. Pair with [`persist_working`](Self::persist_working)
    /// when the two failures need to be told apart.
    pub fn reload_from_main(&mut self) -> Result<()> {
        let loaded = self.main.load()?;
        if loaded.is_none() {
            tracing::info!(main = %self.main.location(), "main snapshot absent, resetting to empty");
        }
        self.items = loaded.unwrap_or_default();
        tracing::info!(count = self.items.len(), "reloaded from main");
        Ok(())
    }

    pub fn main_store(&self) -> &S {
        &self.main
    }

    pub fn working_store(&self) -> &S {
        &self.working
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.identifier == id)
    }

    /// Rewrite the working snapshot from the current collection.
    pub fn persist_working(&self) -> Result<()> {
        self.working.save(&self.items)
    }
}
