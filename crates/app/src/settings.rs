//! Handles settings for the application.
//!
//! Settings are layered: an optional TOML file, then `CONTI_*` environment
//! variables, then command line flags.
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/conti";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level for the `tracing` env filter.
    pub level: String,
    /// Account username; falls back to the snapshot's `owner`.
    pub owner: Option<String>,
    /// Path to the snapshot JSON file.
    pub snapshot: Option<String>,
    pub format: Format,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            owner: None,
            snapshot: None,
            format: Format::Table,
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "conti")]
#[command(about = "Shows who owes whom from a snapshot of shared expenses")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Snapshot file (JSON).
    #[arg(long)]
    pub snapshot: Option<String>,
    /// Override the account username.
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    /// Override log level (e.g. debug).
    #[arg(long)]
    pub level: Option<String>,
}

impl Settings {
    pub fn new(args: Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(args.config.is_some()))
            .add_source(config::Environment::with_prefix("CONTI"))
            .build()?
            .try_deserialize()?;

        settings.apply(args);
        Ok(settings)
    }

    fn apply(&mut self, args: Args) {
        if let Some(snapshot) = args.snapshot {
            self.snapshot = Some(snapshot);
        }
        if let Some(owner) = args.owner {
            self.owner = Some(owner);
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if let Some(level) = args.level {
            self.level = level;
        }
    }
}
