//! # Email Subcommand
//!
//! Checks each address against the `local@domain.tld` format. Exits 0 when
//! every address is valid, 1 otherwise.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use aidriven_core::validate_email;

use crate::{write_json, CliContext};

/// Arguments for the email subcommand.
#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Addresses to check.
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

#[derive(Debug, Serialize)]
struct EmailReport<'a> {
    address: &'a str,
    valid: bool,
}

/// Execute the email subcommand.
pub fn run_email(args: &EmailArgs, ctx: &CliContext, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<EmailReport<'_>> = args
        .addresses
        .iter()
        .map(|address| EmailReport {
            address,
            valid: validate_email(address),
        })
        .collect();

    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(checked = reports.len(), invalid, "email validation finished");

    if ctx.json {
        write_json(out, &reports)?;
    } else {
        for r in &reports {
            let verdict = if r.valid { "valid" } else { "invalid" };
            writeln!(out, "{}: {verdict}", r.address)?;
        }
    }

    Ok(if invalid == 0 { 0 } else { 1 })
}
