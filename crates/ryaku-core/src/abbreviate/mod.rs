//! Abbreviation generation.
//!
//! Pipeline: the splitter breaks the phrase into words, each word expands
//! into 1- and 2-character [`fragments`], the [`candidates`] generator takes
//! the product of one fragment (or omission) per word, the length [`filter`]
//! bounds the candidate's character count, and the validity [`oracle`]
//! re-tokenizes what is left with a second tokenizer.
//!
//! ```no_run
//! use ryaku_core::abbreviate::{AbbreviateOptions, Abbreviator};
//! use ryaku_core::tokenizer::LinderaTokenizer;
//!
//! let splitter = LinderaTokenizer::new("decompose", "embedded://ipadic", None)?;
//! let validator = LinderaTokenizer::new("normal", "embedded://ipadic", None)?;
//! let abbreviator = Abbreviator::new(splitter, validator, AbbreviateOptions::default());
//!
//! for abbreviation in abbreviator.abbreviate("関西国際空港")? {
//!     println!("{abbreviation}");
//! }
//! # Ok::<(), ryaku_core::error::TokenizeError>(())
//! ```

pub mod candidates;
pub mod filter;
pub mod fragments;
pub mod oracle;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, TokenizeResult};
use crate::tokenizer::Tokenizer;

pub use candidates::Candidates;
pub use filter::{filter_by_length, within_length};
pub use oracle::{ValidityOracle, Verdict};

/// Default minimum candidate length in characters.
pub const DEFAULT_MIN_FILTER: usize = 2;
/// Default maximum candidate length in characters.
pub const DEFAULT_MAX_FILTER: usize = 4;
/// Default minimum reading length.
pub const DEFAULT_MIN_MORA: usize = 3;
/// Default maximum reading length.
pub const DEFAULT_MAX_MORA: usize = 99;

/// Inclusive length window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bounds {
    /// Smallest accepted length.
    pub min: usize,
    /// Largest accepted length.
    pub max: usize,
}

impl Bounds {
    /// Create a window. See [`Bounds::validated`] for checking the order.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `len` lies within the window.
    pub const fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    /// Create a window, rejecting `min > max`.
    pub fn validated(name: &'static str, min: usize, max: usize) -> ConfigResult<Self> {
        if min > max {
            return Err(ConfigError::InvalidRange { name, min, max });
        }
        Ok(Self { min, max })
    }
}

/// Length windows applied by the [`Abbreviator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct AbbreviateOptions {
    /// Candidate length in characters.
    pub filter: Bounds,
    /// Reading length of the validated token.
    pub mora: Bounds,
}

impl Default for AbbreviateOptions {
    fn default() -> Self {
        Self {
            filter: Bounds::new(DEFAULT_MIN_FILTER, DEFAULT_MAX_FILTER),
            mora: Bounds::new(DEFAULT_MIN_MORA, DEFAULT_MAX_MORA),
        }
    }
}

/// Result of abbreviating one phrase, with pipeline statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbbreviationReport {
    /// The input phrase.
    pub phrase: String,
    /// Words the splitter produced (empty when the phrase was short enough to
    /// be returned as-is).
    pub words: Vec<String>,
    /// Size of the full candidate product before filtering.
    pub raw_candidates: usize,
    /// Candidates that passed the length filter.
    pub length_filtered: usize,
    /// Accepted abbreviations, in generation order.
    pub abbreviations: Vec<String>,
}

/// Generates abbreviations using a splitter and a validating tokenizer.
///
/// Each instance owns its tokenizers; use one instance per thread.
pub struct Abbreviator<S, V> {
    splitter: S,
    oracle: ValidityOracle<V>,
    options: AbbreviateOptions,
}

impl<S, V> Abbreviator<S, V>
where
    S: Tokenizer,
    V: Tokenizer,
{
    /// Create an abbreviator.
    pub const fn new(splitter: S, validator: V, options: AbbreviateOptions) -> Self {
        Self {
            splitter,
            oracle: ValidityOracle::new(validator, options.mora),
            options,
        }
    }

    /// Options in effect.
    pub const fn options(&self) -> AbbreviateOptions {
        self.options
    }

    /// The word-splitting tokenizer.
    pub const fn splitter(&self) -> &S {
        &self.splitter
    }

    /// The validating tokenizer.
    pub const fn validator(&self) -> &V {
        self.oracle.tokenizer()
    }

    /// Abbreviations of `phrase`, in generation order.
    ///
    /// A phrase no longer than the minimum filter length is returned as the
    /// only result, unchecked. Only a splitter failure on `phrase` is an
    /// error; a phrase with no valid abbreviation yields an empty list.
    pub fn abbreviate(&self, phrase: &str) -> TokenizeResult<Vec<String>> {
        Ok(self.report(phrase)?.abbreviations)
    }

    /// Abbreviate `phrase` and report pipeline statistics.
    #[tracing::instrument(skip(self), fields(splitter = self.splitter.name(), validator = self.validator().name()))]
    pub fn report(&self, phrase: &str) -> TokenizeResult<AbbreviationReport> {
        let AbbreviateOptions { filter, .. } = self.options;

        if phrase.chars().count() <= filter.min {
            debug!("phrase within minimum length, returned as-is");
            return Ok(AbbreviationReport {
                phrase: phrase.to_string(),
                words: Vec::new(),
                raw_candidates: 1,
                length_filtered: 1,
                abbreviations: vec![phrase.to_string()],
            });
        }

        let words = self.splitter.separate_words(phrase)?;
        let candidates = Candidates::from_words(&words);
        let raw_candidates = candidates.total();

        let filtered: Vec<String> =
            filter_by_length(candidates.with_max_len(filter.max), filter).collect();
        let length_filtered = filtered.len();
        let abbreviations = self.oracle.validate(filtered);

        debug!(
            words = words.len(),
            raw_candidates,
            length_filtered,
            accepted = abbreviations.len(),
            "phrase abbreviated"
        );

        Ok(AbbreviationReport {
            phrase: phrase.to_string(),
            words,
            raw_candidates,
            length_filtered,
            abbreviations,
        })
    }
}
