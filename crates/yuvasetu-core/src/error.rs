//! Error types for yuvasetu-core.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted key-value data.
///
/// Callers in the shell never surface these to the user: a failed read is
/// treated as "no value" and a failed write is logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store is not available (no window, storage disabled, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// Underlying read or write failed
    #[error("I/O error: {0}")]
    Io(String),
    /// A stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors produced when parsing one of the enumerated string values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("Unknown theme value: {0}")]
    UnknownTheme(String),
    #[error("Unknown contrast value: {0}")]
    UnknownContrast(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
