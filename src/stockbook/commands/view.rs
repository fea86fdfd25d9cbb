use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::SnapshotStore;

/// Look up one item. A missing ID is reported as a message, not an error.
pub fn run<S: SnapshotStore>(inventory: &Inventory<S>, id: i64) -> Result<CmdResult> {
    match inventory.get(id) {
        Some(item) => Ok(CmdResult::default().with_listed_items(vec![item.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Item not found."));
            Ok(result)
        }
    }
}
