//! Abbreviate command: generate abbreviations of phrases.

use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use ryaku_core::abbreviate::{AbbreviateOptions, AbbreviationReport, Abbreviator, Bounds};
use ryaku_core::config::Config;
use ryaku_core::tokenizer::{Backend, Tokenizer};

use super::{build_tokenizers, read_input_file};

/// Phrases abbreviated when none are given.
pub const SAMPLE_PHRASES: &[&str] = &[
    "短期大学",
    "関西国際空港",
    "経営財団",
    "伊豆急行",
    "逃げるは恥だが役に立つ",
    "慶應義塾大学",
];

/// Arguments for the `abbreviate` subcommand.
#[derive(Args, Debug, Default)]
pub struct AbbreviateArgs {
    /// Phrases to abbreviate (built-in samples when neither phrases nor a file is given).
    pub phrases: Vec<String>,

    /// Read phrases from a file, one per line.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<Utf8PathBuf>,

    /// Shortest candidate, in characters.
    #[arg(long)]
    pub min_filter: Option<usize>,

    /// Longest candidate, in characters.
    #[arg(long)]
    pub max_filter: Option<usize>,

    /// Shortest accepted reading.
    #[arg(long)]
    pub min_mora: Option<usize>,

    /// Longest accepted reading.
    #[arg(long)]
    pub max_mora: Option<usize>,

    /// Splitter backend (overrides config).
    #[arg(long, value_enum)]
    pub splitter: Option<Backend>,

    /// Validator backend (overrides config).
    #[arg(long, value_enum)]
    pub validator: Option<Backend>,
}

impl AbbreviateArgs {
    /// Merge command-line bounds over the configured ones.
    fn options(&self, config: &Config) -> anyhow::Result<AbbreviateOptions> {
        Ok(AbbreviateOptions {
            filter: Bounds::validated(
                "filter",
                self.min_filter.unwrap_or(config.min_filter),
                self.max_filter.unwrap_or(config.max_filter),
            )?,
            mora: Bounds::validated(
                "mora",
                self.min_mora.unwrap_or(config.min_mora),
                self.max_mora.unwrap_or(config.max_mora),
            )?,
        })
    }
}

/// Result for one phrase of a batch.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PhraseOutcome {
    /// The phrase was split and its candidates validated.
    Abbreviated(AbbreviationReport),
    /// The splitter could not segment the phrase.
    Failed {
        /// The input phrase.
        phrase: String,
        /// Why the phrase was skipped.
        error: String,
    },
}

impl PhraseOutcome {
    const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Abbreviate every phrase and print the results.
///
/// A phrase the splitter cannot handle is reported and skipped; the command
/// still fails once the whole batch has been processed.
#[instrument(name = "cmd_abbreviate", skip_all, fields(file = ?args.file))]
pub fn cmd_abbreviate(
    args: AbbreviateArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.options(config)?;
    let phrases = collect_phrases(&args, max_input_bytes)?;
    debug!(phrases = phrases.len(), ?options, "executing abbreviate command");

    let (splitter, validator) = build_tokenizers(config, args.splitter, args.validator)?;
    let abbreviator = Abbreviator::new(splitter, validator, options);

    let progress = if args.file.is_some() && !global_json {
        progress_bar(phrases.len())
    } else {
        ProgressBar::hidden()
    };

    let outcomes = abbreviate_all(&abbreviator, &phrases, &progress, !global_json);
    progress.finish_and_clear();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }

    let failed = outcomes.iter().filter(|outcome| outcome.is_failed()).count();
    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} phrases could not be abbreviated",
            outcomes.len()
        );
    }

    Ok(())
}

/// Run every phrase through `abbreviator`, collecting failures instead of
/// stopping at the first one.
fn abbreviate_all<S, V>(
    abbreviator: &Abbreviator<S, V>,
    phrases: &[String],
    progress: &ProgressBar,
    print: bool,
) -> Vec<PhraseOutcome>
where
    S: Tokenizer,
    V: Tokenizer,
{
    let mut outcomes = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        progress.set_message(phrase.clone());
        let outcome = match abbreviator.report(phrase) {
            Ok(report) => PhraseOutcome::Abbreviated(report),
            Err(e) => {
                warn!(phrase = %phrase, error = %e, "skipping phrase");
                PhraseOutcome::Failed {
                    phrase: phrase.clone(),
                    error: e.to_string(),
                }
            }
        };
        progress.inc(1);
        if print {
            progress.suspend(|| print_outcome(&outcome));
        }
        outcomes.push(outcome);
    }
    outcomes
}

fn collect_phrases(
    args: &AbbreviateArgs,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<Vec<String>> {
    let mut phrases = args.phrases.clone();
    if let Some(ref path) = args.file {
        let content = read_input_file(path, max_input_bytes)?;
        phrases.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    } else if phrases.is_empty() {
        phrases = SAMPLE_PHRASES.iter().map(|p| (*p).to_string()).collect();
    }
    Ok(phrases)
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    bar
}

fn print_outcome(outcome: &PhraseOutcome) {
    match outcome {
        PhraseOutcome::Abbreviated(report) => print_report(report),
        PhraseOutcome::Failed { phrase, error } => {
            println!("{}: {}", phrase.bold(), error.red());
        }
    }
}

fn print_report(report: &AbbreviationReport) {
    if report.abbreviations.is_empty() {
        println!("{}: {}", report.phrase.bold(), "(none)".dimmed());
    } else {
        println!(
            "{}: {}",
            report.phrase.bold(),
            report.abbreviations.join(", ").green()
        );
    }
}
