//! # aidriven-cli: Command-Line Front End
//!
//! A presentation surface over `aidriven-core`. Argument parsing lives here;
//! every result shown to the user is computed by the core crate.
//!
//! ## Subcommands
//!
//! - `aidriven email`: Check addresses against the email format.
//! - `aidriven date`: Long or short calendar rendering of an instant.
//! - `aidriven relative`: Relative phrase for an instant.
//! - `aidriven uuid`: Canonical or short identifiers.
//! - `aidriven ask`: Canned assistant replies and suggestions.
//!
//! ```bash
//! aidriven email user@example.com "user @example.com"
//! aidriven date --at 2024-01-15T12:00:00Z --offset +09:00
//! aidriven uuid --short --count 3
//! ```
//!
//! Handlers write to the supplied `out` and return the process exit code.

pub mod ask;
pub mod config;
pub mod date;
pub mod email;
pub mod identifier;

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;

/// State shared by every subcommand handler.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Loaded configuration.
    pub config: Config,
    /// Emit JSON instead of plain text.
    pub json: bool,
}

impl CliContext {
    /// Create a context from a loaded configuration.
    pub fn new(config: Config, json: bool) -> Self {
        Self { config, json }
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({"ok": true})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["ok"], true);
    }
}
