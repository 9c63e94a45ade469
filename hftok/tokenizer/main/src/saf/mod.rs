//! Facade re-exports for hftok-tokenizer

pub use crate::api::error::{TokenizerError, TokenizerResult};
pub use crate::api::types::{DecodeOptions, ModelId};
pub use crate::core::hf::{clean_up_tokenization, HFTokenizer};
pub use crate::core::loader::HubLoader;
pub use crate::core::quiet::{with_log_level, LogLevelGuard};
pub use crate::spi::contract::{Tokenizer, TokenizerLoader};
