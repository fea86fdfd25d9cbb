use crate::error::{Result, StockbookError};
use crate::model::DEFAULT_CURRENCY_SYMBOL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAIN_PATH: &str = "inventory.json";
const DEFAULT_WORKING_PATH: &str = "inventory.working.json";

/// Configuration for stockbook, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockbookConfig {
    /// Where the explicit "save to main" snapshot lives
    #[serde(default = "default_main_path")]
    pub main_path: PathBuf,

    /// Where the auto-updated working snapshot lives
    #[serde(default = "default_working_path")]
    pub working_path: PathBuf,

    /// Symbol printed in front of prices and totals
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_main_path() -> PathBuf {
    PathBuf::from(DEFAULT_MAIN_PATH)
}

fn default_working_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORKING_PATH)
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for StockbookConfig {
    fn default() -> Self {
        Self {
            main_path: default_main_path(),
            working_path: default_working_path(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl StockbookConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            StockbookError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            StockbookError::Config(format!("cannot parse {}: {}", config_path.display(), e))
        })
    }

    /// Apply explicit path overrides (command line or environment).
    pub fn with_paths(mut self, main: Option<PathBuf>, working: Option<PathBuf>) -> Self {
        if let Some(main) = main {
            self.main_path = main;
        }
        if let Some(working) = working {
            self.working_path = working;
        }
        self
    }
}
