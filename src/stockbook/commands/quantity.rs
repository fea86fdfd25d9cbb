use crate::commands::{unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(
    inventory: &mut Inventory<S>,
    id: i64,
    new_quantity: i64,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match inventory.update_quantity(id, new_quantity) {
        Ok(item) => result.add_message(CmdMessage::success(format!(
            "Quantity of item {} set to {}.",
            item.identifier, item.quantity
        ))),
        Err(e) => result.add_message(unsaved("Quantity updated", e)?),
    }

    Ok(result)
}
