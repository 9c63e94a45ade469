pub mod decode;
pub mod tokenize;

use std::fmt;
use std::io;

use thiserror::Error;

use crate::prompt::PromptError;

/// What the user can do once a tokenizer is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Tokenize,
    Decode,
    ChangeModel,
    Exit,
}

impl Action {
    /// Menu contents, in display order.
    pub const ALL: &'static [Action] = &[
        Action::Tokenize,
        Action::Decode,
        Action::ChangeModel,
        Action::Exit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Tokenize => "Tokenize text",
            Action::Decode => "Decode token IDs",
            Action::ChangeModel => "Change model",
            Action::Exit => "Exit",
        })
    }
}

/// Failures an action cannot recover from by itself. Tokenizer and input
/// errors are reported inside the action and never surface here.
#[derive(Error, Debug)]
pub enum CmdError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type CmdResult = Result<(), CmdError>;

/// Separator line around result blocks.
pub(crate) const RULE: &str = "-------------------------";
