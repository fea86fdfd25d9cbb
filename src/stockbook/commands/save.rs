use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    inventory.persist_to_main()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} item(s) to {}.",
        inventory.len(),
        inventory.main_store().location()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use crate::store::memory::MemStore;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_main_snapshot() {
        let mut inv = Inventory::open(MemStore::new("main"), MemStore::new("working")).unwrap();
        inv.add(Item::new(1, "Bolt", 1, dec!(1)).unwrap()).unwrap();

        let result = run(&inv).unwrap();
        assert_eq!(result.messages[0].content, "Saved 1 item(s) to mem://main.");
        assert_eq!(inv.main_store().writes(), 1);
    }

    #[test]
    fn main_write_failure_is_an_error() {
        let inv = Inventory::open(MemStore::new("main"), MemStore::new("working")).unwrap();
        inv.main_store().set_simulate_write_error(true);
        assert!(run(&inv).unwrap_err().is_persistence());
    }
}
