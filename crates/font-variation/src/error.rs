//! Error types for parsing axis variations.

use std::result;

/// Errors that can occur while parsing an axis variation such as `'wght' 700`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("axis tag is empty")]
    EmptyTag,

    #[error("axis tag must be 1-4 printable ASCII characters: {0:?}")]
    InvalidTag(String),

    #[error("unterminated quote in axis tag: {0:?}")]
    UnterminatedQuote(String),

    #[error("missing value for axis {0:?}")]
    MissingValue(String),

    #[error("invalid axis value: {0:?}")]
    InvalidValue(String),
}

pub type Result<T> = result::Result<T, Error>;
