//! # hftok tokenizer
//!
//! Gateway between the hftok front end and the HuggingFace tokenizer stack.
//!
//! This crate provides:
//! - A [`Tokenizer`] contract (encode, id-to-token lookup, decode)
//! - [`HFTokenizer`], a wrapper over the `tokenizers` crate
//! - [`HubLoader`], which resolves a model identifier (hub repo or local path)
//!   to a loaded tokenizer while keeping library logging quiet
//!
//! ## Example
//!
//! ```rust,ignore
//! use hftok_tokenizer::{HubLoader, ModelId, Tokenizer, TokenizerLoader};
//!
//! let loader = HubLoader::new();
//! let model = ModelId::new("bert-base-uncased").unwrap();
//! let tokenizer = loader.load(&model)?;
//! let ids = tokenizer.encode("Hello world")?;
//! println!("{:?}", tokenizer.ids_to_tokens(&ids)?);
//! ```

pub mod api;
pub(crate) mod core;
mod saf;
pub mod spi;

pub use saf::*;
