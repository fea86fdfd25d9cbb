//! # Commands
//!
//! One module per user action. Each `run` takes the inventory plus already-typed
//! arguments and returns a [`CmdResult`]: the data to show and a list of
//! messages. Nothing in here prints.
//!
//! Errors that mean "the action did not happen" (`NotFound`, `InvalidQuantity`,
//! an unreadable main snapshot) are returned as `Err`. A failed working-snapshot
//! write after a mutation is not: the change already happened in memory, so it
//! is reported as a warning message alongside the normal outcome.

use crate::error::{Result, StockbookError};
use crate::model::Item;
use rust_decimal::Decimal;

pub mod add;
pub mod list;
pub mod load;
pub mod quantity;
pub mod remove;
pub mod save;
pub mod total;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<Item>,
    pub total_value: Option<Decimal>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_total_value(mut self, total: Decimal) -> Self {
        self.total_value = Some(total);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Turn a post-mutation persistence failure into a warning; pass anything else on.
fn unsaved(done: &str, err: StockbookError) -> Result<CmdMessage> {
    if err.is_persistence() {
        Ok(CmdMessage::warning(format!(
            "{} in memory, but the working snapshot was not saved: {}",
            done, err
        )))
    } else {
        Err(err)
    }
}
