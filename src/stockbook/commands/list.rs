use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_items(inventory.list_all().to_vec());
    if result.listed_items.is_empty() {
        result.add_message(CmdMessage::info("Inventory is empty."));
    }
    Ok(result)
}
