//! # aidriven CLI entry point
//!
//! Parses command-line arguments, initializes logging, loads configuration
//! and dispatches to the subcommand handlers in `aidriven_cli`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aidriven_cli::ask::{run_ask, AskArgs};
use aidriven_cli::config::{Config, CONFIG_ENV};
use aidriven_cli::date::{run_date, run_relative, DateArgs, RelativeArgs};
use aidriven_cli::email::{run_email, EmailArgs};
use aidriven_cli::identifier::{run_uuid, UuidArgs};
use aidriven_cli::CliContext;

/// AI-driven app utilities from the command line.
///
/// Validates email addresses, formats dates and relative times, generates
/// identifiers, and answers from a canned assistant.
#[derive(Parser, Debug)]
#[command(name = "aidriven", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check addresses against the email format.
    Email(EmailArgs),

    /// Format an instant as a calendar date.
    Date(DateArgs),

    /// Describe an instant relative to now.
    Relative(RelativeArgs),

    /// Generate random identifiers.
    Uuid(UuidArgs),

    /// Ask the canned assistant.
    Ask(AskArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "aidriven CLI starting");

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    let ctx = CliContext::new(config, cli.json);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Email(args) => run_email(args, &ctx, &mut out),
        Commands::Date(args) => run_date(args, &ctx, &mut out),
        Commands::Relative(args) => run_relative(args, &ctx, &mut out),
        Commands::Uuid(args) => run_uuid(args, &ctx, &mut out),
        Commands::Ask(args) => run_ask(args, &ctx, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
