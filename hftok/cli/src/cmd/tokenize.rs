use std::io::Write;

use hftok_tokenizer::{Tokenizer, TokenizerError, TokenizerResult};

use super::{CmdResult, RULE};
use crate::input::parse_free_text;
use crate::prompt::Prompter;

/// Token IDs of one input together with their vocabulary strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizationResult {
    pub ids: Vec<u32>,
    /// `tokens[i]` is the vocabulary entry for `ids[i]`.
    pub tokens: Vec<String>,
}

impl TokenizationResult {
    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

/// Encode `text` and look up the string form of every resulting ID.
pub fn tokenize(tokenizer: &dyn Tokenizer, text: &str) -> TokenizerResult<TokenizationResult> {
    let ids = tokenizer.encode(text)?;
    let tokens = tokenizer.ids_to_tokens(&ids)?;
    if tokens.len() != ids.len() {
        return Err(TokenizerError::EncodeFailed(format!(
            "got {} tokens for {} token IDs",
            tokens.len(),
            ids.len()
        )));
    }
    Ok(TokenizationResult { ids, tokens })
}

pub fn render<W: Write>(out: &mut W, result: &TokenizationResult) -> std::io::Result<()> {
    writeln!(out, "\n✨ Tokenization Results ✨")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "🔹 Token IDs:   {:?}", result.ids)?;
    writeln!(out, "🔹 Tokens:      {:?}", result.tokens)?;
    writeln!(out, "🔹 Token Count: {}", result.count())?;
    writeln!(out, "{}", RULE)
}

/// Prompt for text and print how the active tokenizer splits it.
pub fn run<P, W>(prompter: &mut P, tokenizer: &dyn Tokenizer, out: &mut W) -> CmdResult
where
    P: Prompter + ?Sized,
    W: Write,
{
    let raw = prompter.long_input("Enter the text you want to tokenize")?;
    let text = match parse_free_text(&raw) {
        Ok(text) => text,
        Err(_) => {
            writeln!(out, "💬 Please enter some text to tokenize.")?;
            return Ok(());
        }
    };

    writeln!(out, "\n💬 Input Text:\n'{}'", text)?;

    match tokenize(tokenizer, text) {
        Ok(result) => render(out, &result)?,
        Err(e) => writeln!(out, "❌ Error during tokenization: {}", e)?,
    }
    Ok(())
}
