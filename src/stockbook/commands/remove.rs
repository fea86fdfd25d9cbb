use crate::commands::{unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(inventory: &mut Inventory<S>, id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match inventory.remove(id) {
        Ok(_) => result.add_message(CmdMessage::success("Item removed.")),
        Err(e) => result.add_message(unsaved("Item removed", e)?),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockbookError;
    use crate::model::Item;
    use crate::store::memory::MemStore;
    use rust_decimal_macros::dec;

    fn inventory() -> Inventory<MemStore> {
        let mut inv = Inventory::open(MemStore::new("main"), MemStore::new("working")).unwrap();
        inv.add(Item::new(1, "Bolt", 100, dec!(0.05)).unwrap()).unwrap();
        inv
    }

    #[test]
    fn removes_item() {
        let mut inv = inventory();
        let result = run(&mut inv, 1).unwrap();
        assert!(inv.is_empty());
        assert_eq!(result.messages[0].content, "Item removed.");
    }

    #[test]
    fn missing_id_is_an_error() {
        let mut inv = inventory();
        let err = run(&mut inv, 99).unwrap_err();
        assert!(matches!(err, StockbookError::NotFound(99)));
        assert_eq!(err.to_string(), "Item with ID 99 not found.");
        assert_eq!(inv.len(), 1);
    }
}
