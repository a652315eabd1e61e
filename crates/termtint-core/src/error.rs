//! Error types for termtint

use thiserror::Error;

/// Main error type for termtint operations
#[derive(Error, Debug)]
pub enum TermtintError {
    /// IO error while writing to an output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for termtint operations
pub type Result<T> = std::result::Result<T, TermtintError>;
