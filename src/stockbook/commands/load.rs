use crate::commands::{unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::SnapshotStore;

/// Restore from main. An unreadable main snapshot is an error and changes
/// nothing; a failed working-snapshot rewrite after the reload is a warning.
pub fn run<S: SnapshotStore>(inventory: &mut Inventory<S>) -> Result<CmdResult> {
    inventory.reload_from_main()?;
    let mut result = CmdResult::default();

    match inventory.persist_working() {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Loaded {} item(s) from {}.",
            inventory.len(),
            inventory.main_store().location()
        ))),
        Err(e) => result.add_message(unsaved("Inventory loaded", e)?),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Item;
    use crate::store::memory::MemStore;
    use rust_decimal_macros::dec;

    fn saved_then_extended() -> Inventory<MemStore> {
        let mut inv = Inventory::open(MemStore::new("main"), MemStore::new("working")).unwrap();
        inv.add(Item::new(1, "Bolt", 1, dec!(1)).unwrap()).unwrap();
        inv.persist_to_main().unwrap();
        inv.add(Item::new(2, "Nut", 1, dec!(1)).unwrap()).unwrap();
        inv
    }

    #[test]
    fn restores_saved_state() {
        let mut inv = saved_then_extended();

        let result = run(&mut inv).unwrap();
        assert_eq!(inv.len(), 1);
        assert_eq!(result.messages[0].content, "Loaded 1 item(s) from mem://main.");
    }

    #[test]
    fn unsaved_working_snapshot_is_a_warning() {
        let mut inv = saved_then_extended();
        inv.working_store().set_simulate_write_error(true);

        let result = run(&mut inv).unwrap();
        assert_eq!(inv.len(), 1);
        assert!(!result.has_level(MessageLevel::Success));
        assert!(result.has_level(MessageLevel::Warning));
        assert!(result.messages[0]
            .content
            .starts_with("Inventory loaded in memory, but the working snapshot was not saved"));
    }

    #[test]
    fn corrupt_main_is_an_error() {
        let mut inv = Inventory::open(
            MemStore::new("main").with_document("{}"),
            MemStore::new("working"),
        )
        .unwrap();
        assert!(run(&mut inv).unwrap_err().is_persistence());
    }
}
