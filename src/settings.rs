//! Layered configuration for the simulator.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a config file (`--config`, or `loadgate.toml` in the working directory)
//! 3. `LOADGATE_*` environment variables
//!
//! The `--dwell` flag overrides all of them and is applied in `main`.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use loadgate_types::parse_dwell;
use serde::Deserialize;

/// Default dwell as written in config files.
pub const DEFAULT_DWELL: &str = "3000ms";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Minimum dwell, e.g. `"3s"` or `"500ms"`. Bare numbers are milliseconds.
    pub dwell: String,
}

impl Settings {
    /// Load settings from the optional file and the process environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, Environment::with_prefix("LOADGATE"))
    }

    fn load_with_env(config_path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match config_path {
            Some(path) => File::from(path),
            None => File::with_name("loadgate").required(false),
        };

        Config::builder()
            .set_default("dwell", DEFAULT_DWELL)?
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The configured dwell as a duration.
    pub fn dwell(&self) -> Result<Duration> {
        parse_dwell(&self.dwell).with_context(|| format!("Invalid dwell {:?}", self.dwell))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dwell: DEFAULT_DWELL.to_string(),
        }
    }
}
