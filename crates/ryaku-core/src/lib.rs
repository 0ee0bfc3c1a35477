//! Core library for ryaku.
//!
//! Generates abbreviations (略語) of Japanese phrases and scores how similar
//! two phrases are. Used by the `ryaku` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`abbreviate`] - Candidate generation, filtering, and validation
//! - [`similarity`] - Token-set and string similarity metrics
//! - [`tokenizer`] - Morphological analysis backends
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use ryaku_core::{Abbreviator, ConfigLoader};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//!
//! let abbreviator = Abbreviator::new(
//!     config.build_splitter().expect("splitter"),
//!     config.build_validator().expect("validator"),
//!     config.options().expect("options"),
//! );
//! println!("{:?}", abbreviator.abbreviate("短期大学"));
//! ```
#![deny(unsafe_code)]

pub mod abbreviate;

pub mod config;

pub mod error;

pub mod similarity;

pub mod tokenizer;

pub use abbreviate::{AbbreviateOptions, AbbreviationReport, Abbreviator, Bounds};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, TokenizeError, TokenizeResult};
pub use similarity::{CoOccurrence, SimilarityReport};
pub use tokenizer::{Backend, Token, Tokenizer, TokenizerConfig};

/// Default maximum input size for file input: 1 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1_048_576;
