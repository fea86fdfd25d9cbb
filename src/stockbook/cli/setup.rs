use super::args::Cli;
use directories::ProjectDirs;
use stockbook::config::{StockbookConfig, CONFIG_FILENAME};
use stockbook::error::Result;
use stockbook::inventory::Inventory;
use stockbook::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub(super) struct AppContext {
    pub inventory: Inventory<FileStore>,
    pub currency_symbol: String,
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub(super) fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "stockbook", "stockbook")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    })
}

/// Flags and env vars > config file > defaults.
pub(super) fn resolve_config(cli: &Cli) -> Result<StockbookConfig> {
    let config = match config_path(cli) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            StockbookConfig::load(&path)?
        }
        None => StockbookConfig::default(),
    };
    Ok(config.with_paths(cli.main_path.clone(), cli.working_path.clone()))
}

pub(super) fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = resolve_config(cli)?;
    tracing::debug!(
        main = %config.main_path.display(),
        working = %config.working_path.display(),
        "snapshot locations"
    );

    let inventory = Inventory::open(
        FileStore::new(&config.main_path),
        FileStore::new(&config.working_path),
    )?;

    Ok(AppContext {
        inventory,
        currency_symbol: config.currency_symbol,
    })
}
