use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::error::{TokenizeError, TokenizeResult};

use super::{Token, Tokenizer, UNKNOWN_FIELD};

/// Column layout of a dictionary's detail (feature) fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLayout {
    /// IPADIC and IPADIC-NEologd: pos ×4, inflection ×2, base form, reading,
    /// pronunciation.
    Ipadic,
    /// UniDic: pos ×4, inflection ×2, lemma reading, lemma, surface form,
    /// surface pronunciation, base form, ...
    Unidic,
}

impl DetailLayout {
    /// Guess the layout from a dictionary URI or path.
    pub fn from_uri(uri: &str) -> Self {
        if uri.to_ascii_lowercase().contains("unidic") {
            Self::Unidic
        } else {
            Self::Ipadic
        }
    }

    /// Index of (base form, reading, pronunciation) in the detail fields.
    const fn columns(self) -> (usize, usize, usize) {
        match self {
            Self::Ipadic => (6, 7, 8),
            Self::Unidic => (10, 6, 9),
        }
    }

    /// Build a [`Token`] from a surface and its raw detail fields.
    ///
    /// Unknown words carry fewer columns; missing readings become empty.
    pub fn token(self, surface: String, details: &[&str]) -> Token {
        let field = |idx: usize| {
            details
                .get(idx)
                .copied()
                .unwrap_or(UNKNOWN_FIELD)
                .to_string()
        };
        let phonetic_field = |idx: usize| match details.get(idx).copied() {
            Some(value) if value != UNKNOWN_FIELD => value.to_string(),
            _ => String::new(),
        };
        let (base, reading, pronunciation) = self.columns();

        Token {
            surface,
            pos: field(0),
            pos_detail1: field(1),
            pos_detail2: field(2),
            pos_detail3: field(3),
            infl_type: field(4),
            infl_form: field(5),
            base_form: field(base),
            reading: phonetic_field(reading),
            phonetic: phonetic_field(pronunciation),
        }
    }
}

/// Morphological analyzer backed by a lindera dictionary.
pub struct LinderaTokenizer {
    inner: Segmenter,
    layout: DetailLayout,
}

impl LinderaTokenizer {
    /// Create a tokenizer.
    ///
    /// * `mode`: `"normal"` or `"decompose"`.
    /// * `dict_uri`: e.g. `"embedded://ipadic"` or a path to a compiled dictionary.
    /// * `user_dict_uri`: optional user dictionary.
    #[tracing::instrument]
    pub fn new(mode: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> TokenizeResult<Self> {
        let mode = Mode::from_str(mode).map_err(|e| TokenizeError::Mode {
            mode: mode.to_string(),
            reason: e.to_string(),
        })?;
        let dict = load_dictionary(dict_uri).map_err(|e| TokenizeError::Dictionary {
            uri: dict_uri.to_string(),
            reason: e.to_string(),
        })?;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(uri, &dict.metadata).map_err(|e| {
                TokenizeError::Dictionary {
                    uri: uri.to_string(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };
        tracing::debug!(dictionary = dict_uri, "lindera dictionary loaded");

        Ok(Self {
            inner: Segmenter::new(mode, dict, user_dict),
            layout: DetailLayout::from_uri(dict_uri),
        })
    }
}

impl Tokenizer for LinderaTokenizer {
    fn name(&self) -> &'static str {
        "lindera"
    }

    fn tokenize(&self, phrase: &str) -> TokenizeResult<Vec<Token>> {
        if phrase.is_empty() {
            return Ok(Vec::new());
        }

        let segmented = self
            .inner
            .segment(Cow::Borrowed(phrase))
            .map_err(|e| TokenizeError::Segment {
                phrase: phrase.to_string(),
                reason: e.to_string(),
            })?;

        Ok(segmented
            .into_iter()
            .map(|mut token| {
                let surface = token.surface.to_string();
                self.layout.token(surface, &token.details())
            })
            .collect())
    }
}
