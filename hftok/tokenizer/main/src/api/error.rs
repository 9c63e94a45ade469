//! Error types for tokenizer operations

use thiserror::Error;

/// Result type for tokenizer operations
pub type TokenizerResult<T> = Result<T, TokenizerError>;

/// Errors that can occur while loading or running a tokenizer
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// The identifier does not resolve to any known tokenizer.
    #[error("Could not find tokenizer for model '{0}'")]
    ModelNotFound(String),

    #[error("Failed to load tokenizer: {0}")]
    LoadFailed(String),

    #[error("Tokenizer encode failed: {0}")]
    EncodeFailed(String),

    #[error("Tokenizer decode failed: {0}")]
    DecodeFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TokenizerError {
    /// True for the "no such model" case, as opposed to any other load failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TokenizerError::ModelNotFound(_))
    }
}
