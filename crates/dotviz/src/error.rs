//! Error types for dotviz operations.
//!
//! Malformed graph text is never an error: the parser drops what it does
//! not understand. [`DotvizError`] covers the remaining failure modes.

use std::io;

use thiserror::Error;

/// The main error type for dotviz operations.
#[derive(Debug, Error)]
pub enum DotvizError {
    /// The requested output format is not produced natively.
    #[error("Unsupported output format `{0}`: only `svg` is supported")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
