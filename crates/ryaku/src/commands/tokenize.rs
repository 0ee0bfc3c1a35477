//! Tokenize command: show the morphological analysis of a phrase.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ryaku_core::config::Config;
use ryaku_core::tokenizer::{Backend, SPLITTER_DEFAULTS, Token, VALIDATOR_DEFAULTS};

/// Arguments for the `tokenize` subcommand.
#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Phrase to analyze.
    pub phrase: String,

    /// Analyze with the validator instead of the splitter.
    #[arg(long)]
    pub validator: bool,

    /// Backend (overrides config for the chosen tokenizer).
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,
}

/// Print one line per token: surface, part of speech, reading.
#[instrument(name = "cmd_tokenize", skip_all, fields(phrase = %args.phrase))]
pub fn cmd_tokenize(args: TokenizeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(validator = args.validator, backend = ?args.backend, "executing tokenize command");

    let (mut tokenizer_config, defaults) = if args.validator {
        (config.validator.clone(), VALIDATOR_DEFAULTS)
    } else {
        (config.splitter.clone(), SPLITTER_DEFAULTS)
    };
    if let Some(backend) = args.backend {
        tokenizer_config.backend = backend;
    }
    let tokenizer = tokenizer_config
        .build(defaults)
        .context("failed to build tokenizer")?;
    let tokens = tokenizer.tokenize(&args.phrase)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            print_token(token);
        }
    }

    Ok(())
}

fn print_token(token: &Token) {
    let reading = if token.reading.is_empty() {
        "-"
    } else {
        token.reading.as_str()
    };
    println!(
        "{}\t{}\t{}",
        token.surface.bold(),
        token.pos.dimmed(),
        reading.cyan()
    );
}
