//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use ryaku_core::config::{Config, ConfigSources};
use ryaku_core::tokenizer::{RoleDefaults, SPLITTER_DEFAULTS, TokenizerConfig, VALIDATOR_DEFAULTS};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct TokenizerInfo {
    backend: &'static str,
    dictionary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_dictionary: Option<String>,
    mode: String,
}

impl TokenizerInfo {
    fn from_config(config: &TokenizerConfig, defaults: RoleDefaults) -> Self {
        Self {
            backend: config.backend.as_str(),
            dictionary: config.dictionary(defaults).to_string(),
            user_dictionary: config.user_dictionary.clone(),
            mode: config.mode(defaults).to_string(),
        }
    }

    fn describe(&self) -> String {
        format!("{} ({}, {})", self.backend, self.dictionary, self.mode)
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    min_filter: usize,
    max_filter: usize,
    min_mora: usize,
    max_mora: usize,
    splitter: TokenizerInfo,
    validator: TokenizerInfo,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            min_filter: config.min_filter,
            max_filter: config.max_filter,
            min_mora: config.min_mora,
            max_mora: config.max_mora,
            splitter: TokenizerInfo::from_config(&config.splitter, SPLITTER_DEFAULTS),
            validator: TokenizerInfo::from_config(&config.validator, VALIDATOR_DEFAULTS),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let FullInfo { package, config } = full_info;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    match config.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), config.log_level);
    if let Some(ref dir) = config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Abbreviation".bold().underline());
    println!(
        "{}: {}..={}",
        "Candidate length".dimmed(),
        config.min_filter,
        config.max_filter
    );
    println!(
        "{}: {}..={}",
        "Reading length".dimmed(),
        config.min_mora,
        config.max_mora
    );
    println!("{}: {}", "Splitter".dimmed(), config.splitter.describe());
    println!("{}: {}", "Validator".dimmed(), config.validator.describe());

    Ok(())
}
