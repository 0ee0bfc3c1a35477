//! Phrase similarity metrics.
//!
//! Set-overlap coefficients over token lists ([`CoOccurrence`]) and raw string
//! metrics over characters ([`edit_distance`], [`jaro_winkler`],
//! [`sequence_ratio`]). Every metric is total: degenerate inputs score 0.0
//! instead of failing.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TokenizeResult;
use crate::tokenizer::Tokenizer;

/// Token-set overlap coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoOccurrence {
    /// `|X ∩ Y| / |X ∪ Y|`
    Jaccard,
    /// Overlap coefficient: `|X ∩ Y| / min(|X|, |Y|)`
    Simpson,
}

impl CoOccurrence {
    /// Score two token lists in `[0, 1]`. Duplicates are ignored.
    ///
    /// ```
    /// use ryaku_core::similarity::CoOccurrence;
    ///
    /// let score = CoOccurrence::Simpson.calculate(&["a", "b"], &["a", "c"]);
    /// assert_eq!(score, 0.5);
    /// ```
    pub fn calculate<T>(self, tokens_x: &[T], tokens_y: &[T]) -> f64
    where
        T: Eq + Hash,
    {
        let (x, y) = unique(tokens_x, tokens_y);
        let shared = x.intersection(&y).count();
        let denominator = match self {
            Self::Jaccard => x.union(&y).count(),
            Self::Simpson => x.len().min(y.len()),
        };

        if denominator == 0 {
            0.0
        } else {
            shared as f64 / denominator as f64
        }
    }

    /// Returns the metric name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jaccard => "jaccard",
            Self::Simpson => "simpson",
        }
    }
}

/// The distinct tokens of both lists.
fn unique<'a, T>(tokens_x: &'a [T], tokens_y: &'a [T]) -> (HashSet<&'a T>, HashSet<&'a T>)
where
    T: Eq + Hash,
{
    (tokens_x.iter().collect(), tokens_y.iter().collect())
}

/// Levenshtein distance in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Jaro-Winkler similarity in `[0, 1]`.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b)
}

/// Matching-block ratio in `[0, 1]`: `2M / (|a| + |b|)`, where `M` counts the
/// characters in the blocks found by repeatedly taking the longest common
/// run and recursing on both sides of it.
///
/// Two empty strings are identical and score 1.0.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        positions.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(&a, &positions, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`, earliest in `a`
/// on ties. Returns `(start in a, start in b, length)`.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run length of matches ending at b[j] for the previous row of a
    let mut run_ending: HashMap<usize, usize> = HashMap::new();

    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_run = HashMap::new();
        for &j in positions.get(ch).into_iter().flatten() {
            if j < blo {
                continue;
            }
            if j >= bhi {
                break;
            }
            let k = j
                .checked_sub(1)
                .and_then(|prev| run_ending.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            next_run.insert(j, k);
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        run_ending = next_run;
    }

    (best_i, best_j, best_size)
}

/// Every metric for one pair of phrases.
///
/// Token-set metrics are reported twice: once over the splitter's words and
/// once over the validator's words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// First phrase.
    pub left: String,
    /// Second phrase.
    pub right: String,
    /// Levenshtein distance.
    pub edit_distance: usize,
    /// Jaro-Winkler similarity.
    pub jaro_winkler: f64,
    /// Matching-block ratio.
    pub sequence_ratio: f64,
    /// Jaccard over splitter words.
    pub jaccard: f64,
    /// Jaccard over validator words.
    pub jaccard_validator: f64,
    /// Simpson over splitter words.
    pub simpson: f64,
    /// Simpson over validator words.
    pub simpson_validator: f64,
}

impl SimilarityReport {
    /// Score `left` against `right`.
    #[tracing::instrument(skip(splitter, validator))]
    pub fn compute<S, V>(left: &str, right: &str, splitter: &S, validator: &V) -> TokenizeResult<Self>
    where
        S: Tokenizer + ?Sized,
        V: Tokenizer + ?Sized,
    {
        let split_left = splitter.separate_words(left)?;
        let split_right = splitter.separate_words(right)?;
        let valid_left = validator.separate_words(left)?;
        let valid_right = validator.separate_words(right)?;

        Ok(Self {
            left: left.to_string(),
            right: right.to_string(),
            edit_distance: edit_distance(left, right),
            jaro_winkler: jaro_winkler(left, right),
            sequence_ratio: sequence_ratio(left, right),
            jaccard: CoOccurrence::Jaccard.calculate(&split_left, &split_right),
            jaccard_validator: CoOccurrence::Jaccard.calculate(&valid_left, &valid_right),
            simpson: CoOccurrence::Simpson.calculate(&split_left, &split_right),
            simpson_validator: CoOccurrence::Simpson.calculate(&valid_left, &valid_right),
        })
    }
}
