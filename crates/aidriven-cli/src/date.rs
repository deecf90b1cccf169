//! # Date Subcommands
//!
//! `date` renders an instant as a calendar date; `relative` renders it as a
//! phrase relative to now (or to `--reference`). Instants are RFC 3339
//! strings with any offset.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use aidriven_core::{format_relative_time_from, DateFormatter, DateStyle, Timestamp};

use crate::{write_json, CliContext};

/// Arguments for the date subcommand.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Instant to format (RFC 3339). Defaults to now.
    #[arg(long)]
    pub at: Option<String>,

    /// Abbreviated date with clock time.
    #[arg(long, conflicts_with = "long")]
    pub short: bool,

    /// Long calendar date without time of day.
    #[arg(long)]
    pub long: bool,

    /// UTC offset to render at (`Z`, `UTC`, `±HH:MM`). Overrides configuration.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<String>,
}

/// Arguments for the relative subcommand.
#[derive(Args, Debug)]
pub struct RelativeArgs {
    /// Instant to describe (RFC 3339).
    pub moment: String,

    /// Instant to measure from (RFC 3339). Defaults to now.
    #[arg(long)]
    pub reference: Option<String>,
}

#[derive(Debug, Serialize)]
struct DateReport {
    timestamp: String,
    style: DateStyle,
    formatted: String,
}

#[derive(Debug, Serialize)]
struct RelativeReport {
    timestamp: String,
    reference: String,
    relative: String,
}

fn parse_instant(s: &str) -> Result<Timestamp> {
    Timestamp::parse_lenient(s).with_context(|| format!("cannot parse instant {s:?}"))
}

/// Execute the date subcommand.
pub fn run_date(args: &DateArgs, ctx: &CliContext, out: &mut dyn Write) -> Result<u8> {
    let moment = match &args.at {
        Some(s) => parse_instant(s)?,
        None => Timestamp::now(),
    };
    let formatter = match &args.offset {
        Some(offset) => DateFormatter::parse_offset(offset)?,
        None => ctx.config.formatter()?,
    };
    let style = if args.short {
        DateStyle::Short
    } else if args.long {
        DateStyle::Long
    } else {
        ctx.config.date_style
    };

    tracing::debug!(%moment, %style, offset = %formatter.offset(), "formatting date");
    let formatted = formatter.style(moment, style);

    if ctx.json {
        write_json(
            out,
            &DateReport {
                timestamp: moment.to_iso8601(),
                style,
                formatted,
            },
        )?;
    } else {
        writeln!(out, "{formatted}")?;
    }
    Ok(0)
}

/// Execute the relative subcommand.
pub fn run_relative(args: &RelativeArgs, ctx: &CliContext, out: &mut dyn Write) -> Result<u8> {
    let moment = parse_instant(&args.moment)?;
    let reference = match &args.reference {
        Some(s) => parse_instant(s)?,
        None => Timestamp::now(),
    };
    let relative = format_relative_time_from(moment, reference);

    if ctx.json {
        write_json(
            out,
            &RelativeReport {
                timestamp: moment.to_iso8601(),
                reference: reference.to_iso8601(),
                relative,
            },
        )?;
    } else {
        writeln!(out, "{relative}")?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn date_args(at: &str) -> DateArgs {
        DateArgs {
            at: Some(at.to_string()),
            short: false,
            long: false,
            offset: None,
        }
    }

    fn capture(f: impl FnOnce(&mut dyn Write) -> Result<u8>) -> String {
        let mut buf = Vec::new();
        assert_eq!(f(&mut buf).unwrap(), 0);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn date_defaults_to_long_utc() {
        let args = date_args("2024-01-15T12:00:00Z");
        let text = capture(|out| run_date(&args, &CliContext::default(), out));
        assert_eq!(text, "January 15, 2024\n");
    }

    #[test]
    fn date_short_with_offset_flag() {
        let args = DateArgs {
            short: true,
            offset: Some("-05:00".to_string()),
            ..date_args("2024-01-15T12:00:00Z")
        };
        let text = capture(|out| run_date(&args, &CliContext::default(), out));
        assert_eq!(text, "Jan 15, 2024 at 7:00 AM\n");
    }

    #[test]
    fn date_uses_configured_offset_and_style() {
        let config = Config {
            utc_offset: Some("+09:00".to_string()),
            date_style: DateStyle::Short,
            responses: None,
        };
        let ctx = CliContext::new(config, false);
        let args = date_args("2024-01-15T20:00:00Z");
        let text = capture(|out| run_date(&args, &ctx, out));
        assert_eq!(text, "Jan 16, 2024 at 5:00 AM\n");

        let long = DateArgs {
            long: true,
            ..date_args("2024-01-15T20:00:00Z")
        };
        let text = capture(|out| run_date(&long, &ctx, out));
        assert_eq!(text, "January 16, 2024\n");
    }

    #[test]
    fn date_json_report() {
        let args = date_args("2024-01-15T21:00:00+09:00");
        let ctx = CliContext::new(Config::default(), true);
        let text = capture(|out| run_date(&args, &ctx, out));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["timestamp"], "2024-01-15T12:00:00Z");
        assert_eq!(parsed["style"], "long");
        assert_eq!(parsed["formatted"], "January 15, 2024");
    }

    #[test]
    fn date_rejects_bad_instant() {
        let args = date_args("yesterday");
        let mut buf = Vec::new();
        let err = run_date(&args, &CliContext::default(), &mut buf).unwrap_err();
        assert!(format!("{err:#}").contains("cannot parse instant"));
    }

    #[test]
    fn relative_with_reference() {
        let args = RelativeArgs {
            moment: "2024-01-15T11:00:00Z".to_string(),
            reference: Some("2024-01-15T12:00:00Z".to_string()),
        };
        let text = capture(|out| run_relative(&args, &CliContext::default(), out));
        assert_eq!(text, "1 hour ago\n");
    }

    #[test]
    fn relative_future_json() {
        let args = RelativeArgs {
            moment: "2024-01-18T12:00:00Z".to_string(),
            reference: Some("2024-01-15T12:00:00Z".to_string()),
        };
        let ctx = CliContext::new(Config::default(), true);
        let text = capture(|out| run_relative(&args, &ctx, out));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["relative"], "in 3 days");
    }
}
