//! Candidate validation by re-tokenization.
//!
//! A candidate counts as a real abbreviation when an independent tokenizer
//! sees it as one atomic token with a pronounceable reading length.

use tracing::{debug, trace};

use crate::error::TokenizeResult;
use crate::tokenizer::Tokenizer;

use super::Bounds;

/// Outcome of checking one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Single token with an in-range reading.
    Accepted {
        /// Reading length in characters.
        mora: usize,
    },
    /// The validator split the candidate into this many tokens.
    TokenCount {
        /// Number of tokens produced.
        tokens: usize,
    },
    /// Single token, but the reading length is out of range.
    Mora {
        /// Reading length in characters.
        mora: usize,
    },
    /// The validator failed on the candidate.
    Failed {
        /// Error description.
        reason: String,
    },
}

impl Verdict {
    /// Whether the candidate passed.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Accepts candidates the validator tokenizes as exactly one token whose
/// reading length lies within the mora bounds.
#[derive(Debug)]
pub struct ValidityOracle<T> {
    tokenizer: T,
    mora: Bounds,
}

impl<T: Tokenizer> ValidityOracle<T> {
    /// Create an oracle over `tokenizer`.
    pub const fn new(tokenizer: T, mora: Bounds) -> Self {
        Self { tokenizer, mora }
    }

    /// The validating tokenizer.
    pub const fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Mora bounds in effect.
    pub const fn mora(&self) -> Bounds {
        self.mora
    }

    /// Check one candidate. Validator errors become [`Verdict::Failed`].
    pub fn judge(&self, candidate: &str) -> Verdict {
        match self.inspect(candidate) {
            Ok(verdict) => verdict,
            Err(err) => Verdict::Failed {
                reason: err.to_string(),
            },
        }
    }

    fn inspect(&self, candidate: &str) -> TokenizeResult<Verdict> {
        let tokens = self.tokenizer.tokenize(candidate)?;
        let [token] = tokens.as_slice() else {
            return Ok(Verdict::TokenCount {
                tokens: tokens.len(),
            });
        };

        let mora = token.reading.chars().count();
        if self.mora.contains(mora) {
            Ok(Verdict::Accepted { mora })
        } else {
            Ok(Verdict::Mora { mora })
        }
    }

    /// Whether `candidate` passes.
    pub fn accepts(&self, candidate: &str) -> bool {
        let verdict = self.judge(candidate);
        match verdict {
            Verdict::Failed { ref reason } => debug!(candidate, reason = %reason, "validator failed"),
            _ => trace!(candidate, ?verdict, "candidate judged"),
        }
        verdict.is_accepted()
    }

    /// Keep the accepted candidates, in order.
    pub fn validate<I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.accepts(candidate))
            .collect()
    }
}
