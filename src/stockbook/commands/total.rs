use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_total_value(inventory.total_value()?))
}
