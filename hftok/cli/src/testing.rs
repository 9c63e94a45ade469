//! Scripted prompter and in-memory tokenizer/loader for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use hftok_tokenizer::{DecodeOptions, ModelId, Tokenizer, TokenizerError, TokenizerLoader, TokenizerResult};

use crate::prompt::{PromptError, PromptResult, Prompter};

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Select the menu item with this label.
    Pick(&'static str),
    /// Type this text (line or editor prompt).
    Text(&'static str),
    /// Interrupt the prompt.
    Cancel,
    /// Make the prompt fail with an I/O error.
    Fail,
}

/// Replays answers in order. Running out of answers behaves like Ctrl-C.
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
        }
    }

    fn next_text(&mut self, message: &str) -> PromptResult<String> {
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(text.to_string()),
            Some(Answer::Cancel) | None => Err(PromptError::Cancelled),
            Some(Answer::Fail) => Err(broken_prompt()),
            Some(other) => panic!("expected text for {:?}, script has {:?}", message, other),
        }
    }
}

fn broken_prompt() -> PromptError {
    PromptError::Io(io::Error::new(io::ErrorKind::NotConnected, "not a terminal"))
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> PromptResult<usize> {
        match self.answers.pop_front() {
            Some(Answer::Pick(label)) => Ok(items
                .iter()
                .position(|item| item == label)
                .unwrap_or_else(|| panic!("{:?} is not offered by {:?}: {:?}", label, message, items))),
            Some(Answer::Cancel) | None => Err(PromptError::Cancelled),
            Some(Answer::Fail) => Err(broken_prompt()),
            Some(other) => panic!("expected a pick for {:?}, script has {:?}", message, other),
        }
    }

    fn input(&mut self, message: &str) -> PromptResult<String> {
        self.next_text(message)
    }

    fn long_input(&mut self, message: &str) -> PromptResult<String> {
        self.next_text(message)
    }
}

/// Whitespace-splitting tokenizer over a tiny fixed vocabulary.
///
/// `[UNK]` (101) and `[SEP]` (103) are special. When tagged, token strings
/// are prefixed with the tag so tests can tell instances apart.
pub struct MockTokenizer {
    vocab: Vec<(u32, &'static str)>,
    tag: Option<String>,
    fail_encode: bool,
}

const UNK_ID: u32 = 101;
const SPECIAL: &[&str] = &["[UNK]", "[SEP]"];

impl MockTokenizer {
    pub fn new() -> Self {
        Self {
            vocab: vec![(101, "[UNK]"), (102, "hello"), (103, "[SEP]"), (104, "world")],
            tag: None,
            fail_encode: false,
        }
    }

    pub fn tagged(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_encode: true,
            ..Self::new()
        }
    }

    fn token(&self, id: u32) -> Option<&'static str> {
        self.vocab.iter().find(|(v, _)| *v == id).map(|(_, t)| *t)
    }
}

impl Tokenizer for MockTokenizer {
    fn encode(&self, text: &str) -> TokenizerResult<Vec<u32>> {
        if self.fail_encode {
            return Err(TokenizerError::EncodeFailed("mock encoder is broken".to_string()));
        }
        Ok(text
            .split_whitespace()
            .map(|word| {
                self.vocab
                    .iter()
                    .find(|(_, t)| *t == word)
                    .map_or(UNK_ID, |(id, _)| *id)
            })
            .collect())
    }

    fn ids_to_tokens(&self, ids: &[u32]) -> TokenizerResult<Vec<String>> {
        ids.iter()
            .map(|&id| {
                let token = self
                    .token(id)
                    .ok_or_else(|| TokenizerError::DecodeFailed(format!("unknown id {}", id)))?;
                Ok(match &self.tag {
                    Some(tag) => format!("{}:{}", tag, token),
                    None => token.to_string(),
                })
            })
            .collect()
    }

    fn decode(&self, ids: &[u32], options: DecodeOptions) -> TokenizerResult<String> {
        let words = ids
            .iter()
            .map(|&id| {
                self.token(id)
                    .ok_or_else(|| TokenizerError::DecodeFailed(format!("unknown id {}", id)))
            })
            .collect::<TokenizerResult<Vec<_>>>()?;
        Ok(words
            .into_iter()
            .filter(|w| !options.skip_special_tokens || !SPECIAL.contains(w))
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

/// Knows the catalog models; `broken/model` fails unexpectedly, anything else is not found.
#[derive(Default)]
pub struct MockLoader {
    loaded: RefCell<Vec<String>>,
}

impl MockLoader {
    /// Every identifier a load was attempted for, in order.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded.borrow().clone()
    }
}

impl TokenizerLoader for MockLoader {
    fn load(&self, model: &ModelId) -> TokenizerResult<Box<dyn Tokenizer>> {
        self.loaded.borrow_mut().push(model.to_string());
        match model.as_str() {
            "gpt2" | "bert-base-uncased" => Ok(Box::new(MockTokenizer::tagged(model.as_str()))),
            "broken/model" => Err(TokenizerError::LoadFailed("connection reset".to_string())),
            other => Err(TokenizerError::ModelNotFound(other.to_string())),
        }
    }
}
