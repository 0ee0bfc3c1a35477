//! Similarity command: score two phrases against each other.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use ryaku_core::config::Config;
use ryaku_core::similarity::SimilarityReport;
use ryaku_core::tokenizer::Backend;

use super::build_tokenizers;

/// Arguments for the `similarity` subcommand.
#[derive(Args, Debug)]
pub struct SimilarityArgs {
    /// First phrase.
    pub left: String,

    /// Second phrase.
    pub right: String,

    /// Splitter backend (overrides config).
    #[arg(long, value_enum)]
    pub splitter: Option<Backend>,

    /// Validator backend (overrides config).
    #[arg(long, value_enum)]
    pub validator: Option<Backend>,
}

/// Print every similarity metric for the pair.
#[instrument(name = "cmd_similarity", skip_all, fields(left = %args.left, right = %args.right))]
pub fn cmd_similarity(
    args: SimilarityArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!("executing similarity command");

    let (splitter, validator) = build_tokenizers(config, args.splitter, args.validator)?;
    let report = SimilarityReport::compute(&args.left, &args.right, &splitter, &validator)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} / {}", report.left.bold(), report.right.bold());
        println!("{}: {}", "Edit distance".dimmed(), report.edit_distance);
        println!("{}: {:.4}", "Jaro-Winkler".dimmed(), report.jaro_winkler);
        println!("{}: {:.4}", "Sequence ratio".dimmed(), report.sequence_ratio);
        println!(
            "{}: {:.4} (validator {:.4})",
            "Jaccard".dimmed(),
            report.jaccard,
            report.jaccard_validator
        );
        println!(
            "{}: {:.4} (validator {:.4})",
            "Simpson".dimmed(),
            report.simpson,
            report.simpson_validator
        );
    }

    Ok(())
}
