//! errors.rs - Custom error types for the cleanspeak-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use cleanspeak_lexicon::NormalizationError;

/// This enum represents all possible error types in the `cleanspeak-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanspeakError {
    /// The input could not be turned into text. Callers decide whether to skip the
    /// input or pass it through unfiltered.
    #[error("Input could not be normalized: {0}")]
    Normalization(#[from] NormalizationError),

    /// A supplied configuration is inconsistent. Raised while compiling a lexicon,
    /// never while scanning; the previously active lexicon stays in place.
    #[error("Invalid filter configuration: {0}")]
    Config(String),

    #[error("Failed to serialize configuration: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
