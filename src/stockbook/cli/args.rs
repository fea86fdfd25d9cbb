use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockbook")]
#[command(version, about = "Single-user inventory tracker with JSON snapshots", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "STOCKBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Main snapshot file, written by `save` and read by `load`
    #[arg(long, global = true, env = "STOCKBOOK_MAIN")]
    pub main_path: Option<PathBuf>,

    /// Working snapshot file, rewritten after every change
    #[arg(long, global = true, env = "STOCKBOOK_WORKING")]
    pub working_path: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered menu (the default)
    Menu,

    /// Add an item
    #[command(allow_negative_numbers = true)]
    Add {
        id: i64,
        name: String,
        quantity: i64,
        price: Decimal,
    },

    /// Remove the first item with the given ID
    #[command(alias = "rm")]
    Remove { id: i64 },

    /// Show one item
    #[command(alias = "v")]
    View { id: i64 },

    /// Show all items in stored order
    #[command(alias = "ls")]
    List,

    /// Total value of all items
    Total,

    /// Write the current inventory to the main snapshot
    Save,

    /// Replace the inventory with the main snapshot
    Load,

    /// Change an item's quantity
    #[command(allow_negative_numbers = true)]
    SetQuantity { id: i64, quantity: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["stockbook"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from(["stockbook", "add", "1", "Bolt", "100", "0.05"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                id,
                name,
                quantity,
                price,
            }) => {
                assert_eq!((id, name.as_str(), quantity), (1, "Bolt", 100));
                assert_eq!(price, dec!(0.05));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn negative_quantity_reaches_the_core() {
        let cli = Cli::try_parse_from(["stockbook", "set-quantity", "3", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::SetQuantity { id: 3, quantity: -1 })
        ));
    }

    #[test]
    fn path_flags_are_global() {
        let cli = Cli::try_parse_from([
            "stockbook",
            "list",
            "--main-path",
            "m.json",
            "--working-path",
            "w.json",
        ])
        .unwrap();
        assert_eq!(cli.main_path, Some(PathBuf::from("m.json")));
        assert_eq!(cli.working_path, Some(PathBuf::from("w.json")));
    }

    #[test]
    fn rejects_bad_price() {
        assert!(Cli::try_parse_from(["stockbook", "add", "1", "Bolt", "1", "cheap"]).is_err());
    }
}
