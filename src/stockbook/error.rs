use rust_decimal::Decimal;
use thiserror::Error;

/// Why a snapshot location could not be read or written.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("{0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum StockbookError {
    #[error("Quantity cannot be negative (got {0}).")]
    InvalidQuantity(i64),

    #[error("Price cannot be negative (got {0}).")]
    InvalidPrice(Decimal),

    #[error("Item with ID {0} not found.")]
    NotFound(i64),

    #[error("Value of item {0} is too large to compute.")]
    ItemValueOverflow(i64),

    #[error("Total inventory value is too large to compute.")]
    TotalValueOverflow,

    #[error("Snapshot error at {location}: {source}")]
    Persistence {
        location: String,
        #[source]
        source: PersistenceError,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

impl StockbookError {
    pub fn persistence(location: impl Into<String>, source: impl Into<PersistenceError>) -> Self {
        StockbookError::Persistence {
            location: location.into(),
            source: source.into(),
        }
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, StockbookError::Persistence { .. })
    }
}

pub type Result<T> = std::result::Result<T, StockbookError>;
