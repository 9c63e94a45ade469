//! Validation of raw prompt answers into domain values.

use std::fmt;

use hftok_tokenizer::ModelId;
use thiserror::Error;

pub type InputResult<T> = Result<T, InputError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Blank or whitespace-only input.
    #[error("Input cannot be empty.")]
    Empty,

    #[error("'{0}' is not a valid token ID. Please enter comma-separated integers.")]
    NotANumber(String),
}

/// One entry of the model menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    Catalog(&'static str),
    /// Ask for a free-form repository ID or local path.
    Custom,
}

impl ModelChoice {
    /// Menu contents, in display order.
    pub const CATALOG: &'static [ModelChoice] = &[
        ModelChoice::Catalog("meta-llama/Llama-3.1-70B-Instruct"),
        ModelChoice::Catalog("google/gemma-2-9b-it"),
        ModelChoice::Catalog("mistralai/Mistral-7B-Instruct-v0.3"),
        ModelChoice::Catalog("bert-base-uncased"),
        ModelChoice::Catalog("gpt2"),
        ModelChoice::Custom,
    ];
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelChoice::Catalog(id) => f.write_str(id),
            ModelChoice::Custom => f.write_str("Enter custom model name"),
        }
    }
}

/// Turn a menu pick (plus the typed name, for [`ModelChoice::Custom`]) into a model ID.
///
/// Catalog entries are taken verbatim; custom names are trimmed.
pub fn parse_model_selection(choice: ModelChoice, custom_text: Option<&str>) -> InputResult<ModelId> {
    let id = match choice {
        ModelChoice::Catalog(id) => id,
        ModelChoice::Custom => custom_text.unwrap_or_default().trim(),
    };
    ModelId::new(id).ok_or(InputError::Empty)
}

/// Accept any text with at least one non-whitespace character.
///
/// The text is returned untouched: leading and trailing whitespace change
/// how most tokenizers split the input.
pub fn parse_free_text(raw: &str) -> InputResult<&str> {
    if raw.trim().is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(raw)
    }
}

/// Parse `"101, 2054 ,102,"` style input into token IDs.
///
/// Blank fragments (leading, trailing or doubled commas) are skipped.
pub fn parse_token_id_list(raw: &str) -> InputResult<Vec<u32>> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            fragment
                .parse::<u32>()
                .map_err(|_| InputError::NotANumber(fragment.to_string()))
        })
        .collect::<InputResult<Vec<u32>>>()?;

    if ids.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(ids)
    }
}
