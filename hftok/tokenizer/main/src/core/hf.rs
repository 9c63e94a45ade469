//! HuggingFace Tokenizer wrapper

use std::path::Path;

use crate::api::error::{TokenizerError, TokenizerResult};
use crate::api::types::DecodeOptions;
use crate::spi::contract::Tokenizer;

/// Space-before-punctuation and contraction fixes applied when
/// [`DecodeOptions::clean_up_spaces`] is set.
const CLEAN_UP_RULES: &[(&str, &str)] = &[
    (" .", "."),
    (" ?", "?"),
    (" !", "!"),
    (" ,", ","),
    (" ' ", "'"),
    (" n't", "n't"),
    (" 'm", "'m"),
    (" 's", "'s"),
    (" 've", "'ve"),
    (" 're", "'re"),
];

/// Remove the artificial spaces word-level decoders leave around
/// punctuation and English contractions.
pub fn clean_up_tokenization(text: &str) -> String {
    CLEAN_UP_RULES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// HuggingFace Tokenizer wrapper (uses the `tokenizers` crate).
///
/// Supports all tokenizer formats loadable by HuggingFace: BPE, SentencePiece,
/// WordPiece, etc. Load from a `tokenizer.json` file.
pub struct HFTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HFTokenizer {
    /// Load from a `tokenizer.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TokenizerResult<Self> {
        let p = path.as_ref();
        let tokenizer = tokenizers::Tokenizer::from_file(p).map_err(|e| {
            TokenizerError::LoadFailed(format!(
                "Failed to load tokenizer file: {}: {}",
                p.display(),
                e
            ))
        })?;
        Ok(Self { inner: tokenizer })
    }

    /// Load from the raw contents of a `tokenizer.json` file.
    pub fn from_bytes(bytes: &[u8]) -> TokenizerResult<Self> {
        let tokenizer = tokenizers::Tokenizer::from_bytes(bytes).map_err(|e| {
            TokenizerError::LoadFailed(format!("Failed to parse tokenizer: {}", e))
        })?;
        Ok(Self { inner: tokenizer })
    }
}

impl Tokenizer for HFTokenizer {
    fn encode(&self, text: &str) -> TokenizerResult<Vec<u32>> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| TokenizerError::EncodeFailed(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn ids_to_tokens(&self, ids: &[u32]) -> TokenizerResult<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.inner.id_to_token(id).ok_or_else(|| {
                    TokenizerError::DecodeFailed(format!(
                        "token ID {} is not in the vocabulary",
                        id
                    ))
                })
            })
            .collect()
    }

    fn decode(&self, ids: &[u32], options: DecodeOptions) -> TokenizerResult<String> {
        let text = self
            .inner
            .decode(ids, options.skip_special_tokens)
            .map_err(|e| TokenizerError::DecodeFailed(e.to_string()))?;
        if options.clean_up_spaces {
            Ok(clean_up_tokenization(&text))
        } else {
            Ok(text)
        }
    }

    fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }
}
