use crate::api::error::TokenizerResult;
use crate::api::types::DecodeOptions;

/// Common tokenizer interface.
pub trait Tokenizer {
    /// Encode text to token IDs, adding the model's special tokens.
    fn encode(&self, text: &str) -> TokenizerResult<Vec<u32>>;
    /// Map each ID to its vocabulary string. The output has one entry per input ID.
    fn ids_to_tokens(&self, ids: &[u32]) -> TokenizerResult<Vec<String>>;
    /// Decode token IDs to text.
    fn decode(&self, ids: &[u32], options: DecodeOptions) -> TokenizerResult<String>;
    /// Vocabulary size, including added tokens.
    fn vocab_size(&self) -> usize;
}
