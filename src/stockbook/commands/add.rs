use crate::commands::{unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Item;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(inventory: &mut Inventory<S>, item: Item) -> Result<CmdResult> {
    let id = item.identifier;
    let mut result = CmdResult::default();

    match inventory.add(item) {
        Ok(duplicate) => {
            if duplicate {
                result.add_message(CmdMessage::warning(format!(
                    "Another item already uses ID {}; lookups will find the earlier one.",
                    id
                )));
            }
            result.add_message(CmdMessage::success("Item added."));
        }
        Err(e) => result.add_message(unsaved("Item added", e)?),
    }

    Ok(result)
}
