//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use ryaku_core::config::Config;
use ryaku_core::tokenizer::{Backend, Tokenizer};

pub mod abbreviate;
pub mod info;
pub mod similarity;
pub mod tokenize;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Build the configured splitter and validator, with optional backend
/// overrides from the command line.
pub fn build_tokenizers(
    config: &Config,
    splitter: Option<Backend>,
    validator: Option<Backend>,
) -> anyhow::Result<(Box<dyn Tokenizer>, Box<dyn Tokenizer>)> {
    let mut config = config.clone();
    if let Some(backend) = splitter {
        config.splitter.backend = backend;
    }
    if let Some(backend) = validator {
        config.validator.backend = backend;
    }

    let splitter = config
        .build_splitter()
        .context("failed to build splitter")?;
    let validator = config
        .build_validator()
        .context("failed to build validator")?;
    Ok((splitter, validator))
}
