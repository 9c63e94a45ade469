use std::io::Write;

use hftok_tokenizer::{DecodeOptions, Tokenizer, TokenizerResult};

use super::{CmdResult, RULE};
use crate::input::parse_token_id_list;
use crate::prompt::Prompter;

/// Vocabulary strings for a list of IDs and the text they decode to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingResult {
    pub tokens: Vec<String>,
    pub text: String,
}

/// Look up every ID and decode the whole list, skipping special tokens.
pub fn decode(tokenizer: &dyn Tokenizer, ids: &[u32]) -> TokenizerResult<DecodingResult> {
    let tokens = tokenizer.ids_to_tokens(ids)?;
    let text = tokenizer.decode(ids, DecodeOptions::default())?;
    Ok(DecodingResult { tokens, text })
}

pub fn render<W: Write>(out: &mut W, result: &DecodingResult) -> std::io::Result<()> {
    writeln!(out, "\n✨ Decoding Results ✨")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "🔹 Tokens:         {:?}", result.tokens)?;
    writeln!(out, "🔹 Decoded String: '{}'", result.text)?;
    writeln!(out, "{}", RULE)
}

/// Prompt for comma-separated token IDs and print what they decode to.
pub fn run<P, W>(prompter: &mut P, tokenizer: &dyn Tokenizer, out: &mut W) -> CmdResult
where
    P: Prompter + ?Sized,
    W: Write,
{
    let raw = prompter.input("Enter token IDs separated by commas (e.g. 101, 2054, 102)")?;
    let ids = match parse_token_id_list(&raw) {
        Ok(ids) => ids,
        Err(e) => {
            writeln!(out, "❌ {}", e)?;
            return Ok(());
        }
    };

    match decode(tokenizer, &ids) {
        Ok(result) => render(out, &result)?,
        Err(e) => writeln!(out, "❌ Error during decoding: {}", e)?,
    }
    Ok(())
}
