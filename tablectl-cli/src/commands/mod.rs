//! Command implementations for tablectl CLI

pub mod drop;
pub mod fetch;
pub mod inspect;

use anyhow::Result;
use clap::ValueEnum;
use tablectl_core::TablectlConfig;

// Re-export main dispatcher functions for flat access from main.rs
pub use drop::run_drop;
pub use fetch::run_fetch;
pub use inspect::run_inspect;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by every database command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: TablectlConfig,
    pub database_url: Option<String>,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn database_url(&self) -> Result<String> {
        Ok(self.config.database_url(self.database_url.as_deref())?)
    }

    pub fn max_connections(&self) -> u32 {
        self.config.database.max_connections
    }
}

/// Print a report as pretty JSON or via the text renderer
pub(crate) fn emit<T: serde::Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text(value)),
    }
    Ok(())
}
