mod loader;
mod tokenizer;

pub use loader::TokenizerLoader;
pub use tokenizer::Tokenizer;
