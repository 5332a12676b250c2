use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_DB_PATH: &str = "data/guides.sqlite";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_path: PathBuf,
    pub log_filter: String,
}

impl Settings {
    /// Defaults, then `guides.toml` if present, then `GUIDES_*` variables.
    pub fn load() -> Result<Settings> {
        Config::builder()
            .set_default("database_path", DEFAULT_DB_PATH)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(File::with_name("guides").required(false))
            .add_source(Environment::with_prefix("GUIDES"))
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")
    }
}
