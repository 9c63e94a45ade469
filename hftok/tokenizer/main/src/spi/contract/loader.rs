use crate::api::error::TokenizerResult;
use crate::api::types::ModelId;
use crate::spi::contract::Tokenizer;

/// Resolves a model identifier to a ready-to-use tokenizer.
pub trait TokenizerLoader {
    /// Load the tokenizer named by `model`.
    ///
    /// Fails with [`TokenizerError::ModelNotFound`](crate::TokenizerError::ModelNotFound)
    /// when the identifier resolves to nothing, and with
    /// [`TokenizerError::LoadFailed`](crate::TokenizerError::LoadFailed) otherwise.
    fn load(&self, model: &ModelId) -> TokenizerResult<Box<dyn Tokenizer>>;
}
