//! # UUID Subcommand
//!
//! Prints freshly generated identifiers, one per line.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use aidriven_core::{generate_identifier, generate_short_identifier};

use crate::{write_json, CliContext};

/// Arguments for the uuid subcommand.
#[derive(Args, Debug)]
pub struct UuidArgs {
    /// Print the 8-character short form.
    #[arg(long)]
    pub short: bool,

    /// Number of identifiers to generate.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    pub count: u32,
}

/// Execute the uuid subcommand.
pub fn run_uuid(args: &UuidArgs, ctx: &CliContext, out: &mut dyn Write) -> Result<u8> {
    let generate: fn() -> String = if args.short {
        generate_short_identifier
    } else {
        generate_identifier
    };
    let ids: Vec<String> = (0..args.count).map(|_| generate()).collect();
    tracing::debug!(count = ids.len(), short = args.short, "generated identifiers");

    if ctx.json {
        write_json(out, &ids)?;
    } else {
        for id in &ids {
            writeln!(out, "{id}")?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(short: bool, count: u32) -> String {
        let mut buf = Vec::new();
        let code = run_uuid(&UuidArgs { short, count }, &CliContext::default(), &mut buf).unwrap();
        assert_eq!(code, 0);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn prints_requested_count() {
        let text = run(false, 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 36));
        assert_ne!(lines[0], lines[1]);
    }

    #[test]
    fn short_form() {
        let text = run(true, 2);
        assert!(text.lines().all(|l| l.len() == 8));
    }

    #[test]
    fn json_array() {
        let mut buf = Vec::new();
        let ctx = CliContext {
            json: true,
            ..CliContext::default()
        };
        run_uuid(&UuidArgs { short: false, count: 2 }, &ctx, &mut buf).unwrap();
        let ids: Vec<String> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(ids.len(), 2);
    }
}
