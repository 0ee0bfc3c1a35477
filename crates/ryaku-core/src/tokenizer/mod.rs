//! Morphological tokenizer backends.
//!
//! Abbreviation and similarity code only talks to the [`Tokenizer`] trait, so
//! backends are interchangeable and tests can inject a deterministic fake.
//!
//! Two backends ship with the crate:
//!
//! - [`LinderaTokenizer`]: dictionary-driven analysis (IPADIC by default,
//!   IPADIC-NEologd and UniDic behind cargo features). Provides readings.
//! - [`ScriptTokenizer`]: dictionary-free splitting at script boundaries
//!   (kanji / hiragana / katakana / latin / digits). Only kana have readings.

mod lindera;
mod script;

use serde::{Deserialize, Serialize};

use crate::error::TokenizeResult;

pub use self::lindera::{DetailLayout, LinderaTokenizer};
pub use self::script::ScriptTokenizer;

/// Dictionary used by the splitter when none is configured.
pub const DEFAULT_SPLITTER_DICTIONARY: &str = "embedded://ipadic";

/// Dictionary used by the validator when none is configured.
///
/// The neologism-aware dictionary is preferred when it was compiled in.
pub const DEFAULT_VALIDATOR_DICTIONARY: &str = if cfg!(feature = "neologd") {
    "embedded://ipadic-neologd"
} else {
    "embedded://ipadic"
};

/// Mode used by the splitter when none is configured.
///
/// Decompose mode breaks long kanji compounds (関西国際空港) into their parts,
/// which is what candidate generation works on.
pub const DEFAULT_SPLITTER_MODE: &str = "decompose";

/// Mode used by the validator when none is configured.
///
/// Normal mode keeps known compounds whole, so a real abbreviation comes back
/// as one token.
pub const DEFAULT_VALIDATOR_MODE: &str = "normal";

/// Fallback dictionary and mode for one tokenizer role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDefaults {
    /// Dictionary URI used when none is configured.
    pub dictionary: &'static str,
    /// Segmentation mode used when none is configured.
    pub mode: &'static str,
}

/// Defaults of the word splitter.
pub const SPLITTER_DEFAULTS: RoleDefaults = RoleDefaults {
    dictionary: DEFAULT_SPLITTER_DICTIONARY,
    mode: DEFAULT_SPLITTER_MODE,
};

/// Defaults of the candidate validator.
pub const VALIDATOR_DEFAULTS: RoleDefaults = RoleDefaults {
    dictionary: DEFAULT_VALIDATOR_DICTIONARY,
    mode: DEFAULT_VALIDATOR_MODE,
};

/// A single morpheme with its analysis fields.
///
/// Fields a backend cannot provide are empty strings (readings) or `"*"`
/// (part-of-speech columns), following the MeCab feature conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Surface form as it appears in the phrase.
    pub surface: String,
    /// Part of speech (品詞).
    pub pos: String,
    /// Part-of-speech subdivision 1.
    pub pos_detail1: String,
    /// Part-of-speech subdivision 2.
    pub pos_detail2: String,
    /// Part-of-speech subdivision 3.
    pub pos_detail3: String,
    /// Inflection type (活用型).
    pub infl_type: String,
    /// Inflection form (活用形).
    pub infl_form: String,
    /// Dictionary form (原形).
    pub base_form: String,
    /// Katakana reading (読み); empty when unknown.
    pub reading: String,
    /// Pronunciation (発音); empty when unknown.
    pub phonetic: String,
}

impl Token {
    /// Build a token that only knows its surface, part of speech, and reading.
    pub fn new(
        surface: impl Into<String>,
        pos: impl Into<String>,
        reading: impl Into<String>,
    ) -> Self {
        let reading = reading.into();
        Self {
            surface: surface.into(),
            pos: pos.into(),
            pos_detail1: UNKNOWN_FIELD.to_string(),
            pos_detail2: UNKNOWN_FIELD.to_string(),
            pos_detail3: UNKNOWN_FIELD.to_string(),
            infl_type: UNKNOWN_FIELD.to_string(),
            infl_form: UNKNOWN_FIELD.to_string(),
            base_form: UNKNOWN_FIELD.to_string(),
            phonetic: reading.clone(),
            reading,
        }
    }
}

/// Placeholder used by MeCab-style dictionaries for absent feature columns.
pub(crate) const UNKNOWN_FIELD: &str = "*";

/// A morphological analyzer.
///
/// Implementations must return an empty sequence for an empty phrase, and a
/// single token equal to the phrase when no boundary is recognized.
pub trait Tokenizer {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;

    /// Analyze `phrase` into tokens, in left-to-right order.
    fn tokenize(&self, phrase: &str) -> TokenizeResult<Vec<Token>>;

    /// Surface forms of the phrase's tokens.
    fn separate_words(&self, phrase: &str) -> TokenizeResult<Vec<String>> {
        Ok(self
            .tokenize(phrase)?
            .into_iter()
            .map(|token| token.surface)
            .collect())
    }

    /// Concatenated reading of the phrase's tokens.
    fn yomi(&self, phrase: &str) -> TokenizeResult<String> {
        Ok(self
            .tokenize(phrase)?
            .into_iter()
            .map(|token| token.reading)
            .collect())
    }

    /// Tokens whose part of speech equals `pos` (e.g. `"名詞"`).
    fn filter_by_pos(&self, phrase: &str, pos: &str) -> TokenizeResult<Vec<Token>> {
        Ok(self
            .tokenize(phrase)?
            .into_iter()
            .filter(|token| token.pos == pos)
            .collect())
    }
}

impl<T> Tokenizer for Box<T>
where
    T: Tokenizer + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn tokenize(&self, phrase: &str) -> TokenizeResult<Vec<Token>> {
        (**self).tokenize(phrase)
    }
}

impl<T> Tokenizer for &T
where
    T: Tokenizer + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn tokenize(&self, phrase: &str) -> TokenizeResult<Vec<Token>> {
        (**self).tokenize(phrase)
    }
}

/// Tokenizer backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Backend {
    /// Dictionary-based morphological analysis via lindera (default).
    #[default]
    Lindera,
    /// Dictionary-free script-run splitting.
    Script,
}

impl Backend {
    /// Returns the backend name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lindera => "lindera",
            Self::Script => "script",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one tokenizer role (splitter or validator).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Backend to use.
    pub backend: Backend,
    /// Dictionary URI or path for the lindera backend.
    pub dictionary: Option<String>,
    /// User dictionary URI or path for the lindera backend.
    pub user_dictionary: Option<String>,
    /// Segmentation mode for the lindera backend ("normal" or "decompose").
    pub mode: Option<String>,
}

impl TokenizerConfig {
    /// Instantiate the configured backend, filling unset fields from `defaults`.
    pub fn build(&self, defaults: RoleDefaults) -> TokenizeResult<Box<dyn Tokenizer>> {
        match self.backend {
            Backend::Lindera => {
                let tokenizer = LinderaTokenizer::new(
                    self.mode(defaults),
                    self.dictionary(defaults),
                    self.user_dictionary.as_deref(),
                )?;
                Ok(Box::new(tokenizer))
            }
            Backend::Script => Ok(Box::new(ScriptTokenizer::new())),
        }
    }

    /// Configured segmentation mode, or the role's default.
    pub fn mode<'a>(&'a self, defaults: RoleDefaults) -> &'a str {
        self.mode.as_deref().unwrap_or(defaults.mode)
    }

    /// Configured dictionary, or the role's default.
    pub fn dictionary<'a>(&'a self, defaults: RoleDefaults) -> &'a str {
        self.dictionary.as_deref().unwrap_or(defaults.dictionary)
    }
}
