//! # Ask Subcommand
//!
//! Answers a question from the canned response pool, or with `--suggest`
//! prints templated rewrites of the input instead.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use aidriven_core::{suggestions, Conversation, UtilityError};

use crate::{write_json, CliContext};

/// Arguments for the ask subcommand.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Print suggestions for the text instead of an answer.
    #[arg(long)]
    pub suggest: bool,
}

/// Execute the ask subcommand.
pub fn run_ask(args: &AskArgs, ctx: &CliContext, out: &mut dyn Write) -> Result<u8> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        return Err(UtilityError::EmptyMessage.into());
    }

    if args.suggest {
        let suggested = suggestions(&question);
        if ctx.json {
            write_json(out, &suggested)?;
        } else {
            for s in &suggested {
                writeln!(out, "{s}")?;
            }
        }
        return Ok(0);
    }

    let mut conversation = Conversation::new(ctx.config.response_pool());
    conversation.ask(&question)?;
    tracing::debug!(messages = conversation.len(), "assistant replied");

    if ctx.json {
        write_json(out, conversation.messages())?;
    } else if let Some(reply) = conversation.messages().last() {
        writeln!(out, "{}", reply.text)?;
    }
    Ok(0)
}
