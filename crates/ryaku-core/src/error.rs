//! Error types for ryaku-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A length window has its lower bound above its upper bound.
    #[error("invalid {name} range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Which window was misconfigured (e.g. "filter", "mora").
        name: &'static str,
        /// The configured lower bound.
        min: usize,
        /// The configured upper bound.
        max: usize,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a tokenizer backend.
///
/// These are the only failures [`crate::abbreviate::Abbreviator::abbreviate`]
/// lets through, and only when splitting the input phrase itself fails.
#[derive(Error, Debug)]
pub enum TokenizeError {
    /// The backend's dictionary could not be loaded.
    #[error("failed to load dictionary {uri}: {reason}")]
    Dictionary {
        /// Dictionary location that was requested.
        uri: String,
        /// Backend-provided failure description.
        reason: String,
    },

    /// The segmentation mode string was not recognized.
    #[error("invalid tokenizer mode '{mode}': {reason}")]
    Mode {
        /// Mode that was requested.
        mode: String,
        /// Backend-provided failure description.
        reason: String,
    },

    /// Segmenting a phrase failed.
    #[error("failed to tokenize '{phrase}': {reason}")]
    Segment {
        /// Phrase that could not be segmented.
        phrase: String,
        /// Backend-provided failure description.
        reason: String,
    },
}

/// Result type alias using [`TokenizeError`].
pub type TokenizeResult<T> = Result<T, TokenizeError>;
