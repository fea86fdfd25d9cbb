use super::SnapshotStore;
use crate::error::PersistenceError;
use std::cell::{Cell, RefCell};

/// In-memory snapshot for testing.
///
/// Holds the raw document so the JSON codec is exercised exactly as with files.
/// Single-threaded, hence `Cell`/`RefCell` rather than locks.
#[derive(Debug)]
pub struct MemStore {
    label: String,
    document: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl MemStore {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            document: RefCell::new(None),
            writes: Cell::new(0),
            simulate_write_error: Cell::new(false),
        }
    }

    /// Start with the given raw document already stored.
    pub fn with_document(self, document: impl Into<String>) -> Self {
        *self.document.borrow_mut() = Some(document.into());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Replace the stored document behind the inventory's back.
    pub fn set_document(&self, document: Option<String>) {
        *self.document.borrow_mut() = document;
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SnapshotStore for MemStore {
    fn location(&self) -> String {
        format!("mem://{}", self.label)
    }

    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.document.borrow().clone())
    }

    fn write(&self, document: &str) -> Result<(), PersistenceError> {
        if self.simulate_write_error.get() {
            return Err(PersistenceError::Unavailable(
                "Simulated write error".to_string(),
            ));
        }
        *self.document.borrow_mut() = Some(document.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
