//! # CLI Configuration
//!
//! Optional YAML file, selected with `--config <PATH>` or the
//! `AIDRIVEN_CONFIG` environment variable:
//!
//! ```yaml
//! utc_offset: "+09:00"
//! date_style: short
//! responses:
//!   - "Try the borrow checker's suggestion first."
//! ```
//!
//! Every field is optional. Unknown fields are rejected so that typos do not
//! silently fall back to defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use aidriven_core::{DateFormatter, DateStyle, ResponsePool};

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV: &str = "AIDRIVEN_CONFIG";

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Offset used by `date` when `--offset` is not given (`Z`, `UTC`, `±HH:MM`).
    pub utc_offset: Option<String>,
    /// Style used by `date` when neither `--short` nor `--long` is given.
    pub date_style: DateStyle,
    /// Replacement canned responses for `ask`.
    pub responses: Option<Vec<String>>,
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading configuration");
                Self::load(p)
            }
            None => Ok(Self::default()),
        }
    }

    /// Formatter for the configured offset, UTC when unset.
    pub fn formatter(&self) -> Result<DateFormatter> {
        match &self.utc_offset {
            Some(offset) => DateFormatter::parse_offset(offset)
                .context("invalid utc_offset in configuration"),
            None => Ok(DateFormatter::utc()),
        }
    }

    /// Canned responses from the configuration, or the built-in pool.
    pub fn response_pool(&self) -> ResponsePool {
        match &self.responses {
            Some(responses) => ResponsePool::new(responses.clone()),
            None => ResponsePool::default(),
        }
    }
}
