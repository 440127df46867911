pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use self::toml_config::TomlConfig;

pub const DEFAULT_STORE_DIR: &str = "./.order-lists";

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "order-lists")]
#[command(about = "Import party and item name lists for the order form")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Directory where imported lists are stored")]
    pub store_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Import lists from a .csv, .xlsx or .xls file, replacing the stored ones
    Import { file: String },
    /// Print the stored lists
    Show,
    /// Remove the stored lists
    Clear,
}

/// Effective settings after merging the config file with command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store_dir: String,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    /// Flags win over the file, the file wins over defaults.
    pub fn resolve(
        file: Option<&TomlConfig>,
        store_dir: Option<String>,
        verbose: bool,
        json_logs: bool,
    ) -> Self {
        let file = file.cloned().unwrap_or_default();
        Self {
            store_dir: store_dir
                .or(file.storage.dir)
                .unwrap_or_else(|| DEFAULT_STORE_DIR.to_string()),
            verbose: verbose || file.logging.verbose.unwrap_or(false),
            json_logs: json_logs || file.logging.json.unwrap_or(false),
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        Ok(Settings::resolve(
            file.as_ref(),
            self.store_dir.clone(),
            self.verbose,
            self.json_logs,
        ))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("store_dir", &self.store_dir)
    }
}
