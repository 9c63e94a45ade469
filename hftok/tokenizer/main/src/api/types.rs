//! Data types shared by the gateway and its callers

use std::fmt;

/// Name of a tokenizer to load: a hub repository ID (`org/name`) or a local
/// path to a `tokenizer.json` file or a directory holding one.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    /// Wrap an identifier, rejecting the empty string.
    ///
    /// The value is kept verbatim; callers decide whether to trim.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Options controlling [`Tokenizer::decode`](crate::Tokenizer::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Drop special tokens (padding, separators, ...) from the output.
    pub skip_special_tokens: bool,
    /// Remove the spaces a word-level decoder leaves before punctuation
    /// and English contractions.
    pub clean_up_spaces: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            skip_special_tokens: true,
            clean_up_spaces: true,
        }
    }
}
