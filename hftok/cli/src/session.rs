//! Model-selection / action-selection state machine.

use std::io::{self, Write};
use std::process::ExitCode;

use hftok_tokenizer::{ModelId, Tokenizer, TokenizerLoader};

use crate::cmd::{self, Action, CmdError};
use crate::input::{parse_model_selection, ModelChoice};
use crate::prompt::{choose, PromptError, Prompter};

const MODEL_PROMPT: &str = "Select a model or choose 'Enter custom model name'";
const CUSTOM_MODEL_PROMPT: &str =
    "Enter the Hugging Face model repository name (e.g., 'bert-base-uncased') or a local path";
const ACTION_PROMPT: &str = "What would you like to do?";

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The user chose to leave or interrupted a prompt.
    Success,
    /// `--strict` and the very first model name was empty.
    InvalidModel,
    /// A prompt failed for a reason other than cancellation.
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::InvalidModel | ExitStatus::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// A loaded tokenizer and the identifier it was loaded from.
pub struct Session {
    pub model: ModelId,
    pub tokenizer: Box<dyn Tokenizer>,
}

pub enum State {
    SelectingModel,
    LoadingModel(ModelId),
    SessionActive(Session),
    Terminated(ExitStatus),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Exit with status 1 when the first model name entered is empty,
    /// instead of asking again.
    pub strict: bool,
}

pub struct App<'a, P: Prompter + ?Sized, L: TokenizerLoader + ?Sized, W: Write> {
    prompter: &'a mut P,
    loader: &'a L,
    out: W,
    options: SessionOptions,
    /// Model prompts shown so far.
    selections: usize,
}

impl<'a, P, L, W> App<'a, P, L, W>
where
    P: Prompter + ?Sized,
    L: TokenizerLoader + ?Sized,
    W: Write,
{
    pub fn new(prompter: &'a mut P, loader: &'a L, out: W, options: SessionOptions) -> Self {
        Self {
            prompter,
            loader,
            out,
            options,
            selections: 0,
        }
    }

    /// Drive the state machine from model selection until it terminates.
    pub fn run(&mut self) -> io::Result<ExitStatus> {
        writeln!(self.out, "🤗 Welcome to the Hugging Face Tokenizer CLI! 🤗")?;

        let mut state = State::SelectingModel;
        loop {
            state = match state {
                State::Terminated(status) => return Ok(status),
                other => self.step(other)?,
            };
        }
    }

    /// Perform one transition.
    pub fn step(&mut self, state: State) -> io::Result<State> {
        match state {
            State::SelectingModel => self.select_model(),
            State::LoadingModel(model) => self.load_model(model),
            State::SessionActive(session) => self.session_turn(session),
            State::Terminated(status) => Ok(State::Terminated(status)),
        }
    }

    fn select_model(&mut self) -> io::Result<State> {
        let first = self.selections == 0;
        self.selections += 1;

        let choice = match choose(&mut *self.prompter, MODEL_PROMPT, ModelChoice::CATALOG) {
            Ok(choice) => choice,
            Err(e) => return self.prompt_failed(e),
        };
        let custom = match choice {
            ModelChoice::Custom => match self.prompter.input(CUSTOM_MODEL_PROMPT) {
                Ok(text) => Some(text),
                Err(e) => return self.prompt_failed(e),
            },
            ModelChoice::Catalog(_) => None,
        };

        match parse_model_selection(choice, custom.as_deref()) {
            Ok(model) => Ok(State::LoadingModel(model)),
            Err(_) => {
                writeln!(self.out, "\n❌ Error: Model name cannot be empty.")?;
                if !self.options.strict {
                    Ok(State::SelectingModel)
                } else if first {
                    Ok(State::Terminated(ExitStatus::InvalidModel))
                } else {
                    writeln!(self.out, "\nExiting.")?;
                    Ok(State::Terminated(ExitStatus::Success))
                }
            }
        }
    }

    fn load_model(&mut self, model: ModelId) -> io::Result<State> {
        writeln!(self.out, "\n⏳ Loading tokenizer for '{}'...", model)?;

        match self.loader.load(&model) {
            Ok(tokenizer) => {
                writeln!(self.out, "✅ Tokenizer loaded successfully.")?;
                writeln!(self.out, "   Vocabulary size: {}", tokenizer.vocab_size())?;
                Ok(State::SessionActive(Session { model, tokenizer }))
            }
            Err(e) if e.is_not_found() => {
                writeln!(
                    self.out,
                    "❌ Error: Could not find tokenizer for model '{}'. Please check the repository name.",
                    model
                )?;
                Ok(State::SelectingModel)
            }
            Err(e) => {
                writeln!(self.out, "❌ An unexpected error occurred: {}", e)?;
                Ok(State::SelectingModel)
            }
        }
    }

    fn session_turn(&mut self, session: Session) -> io::Result<State> {
        writeln!(self.out, "\n{}", "-".repeat(20))?;
        writeln!(self.out, "Model: {}", session.model)?;

        let action = match choose(&mut *self.prompter, ACTION_PROMPT, Action::ALL) {
            Ok(action) => action,
            Err(e) => return self.prompt_failed(e),
        };

        let outcome = match action {
            Action::Tokenize => {
                cmd::tokenize::run(&mut *self.prompter, session.tokenizer.as_ref(), &mut self.out)
            }
            Action::Decode => {
                cmd::decode::run(&mut *self.prompter, session.tokenizer.as_ref(), &mut self.out)
            }
            Action::ChangeModel => {
                log::debug!("releasing tokenizer for {}", session.model);
                return Ok(State::SelectingModel);
            }
            Action::Exit => {
                writeln!(self.out, "\n👋 Goodbye!")?;
                return Ok(State::Terminated(ExitStatus::Success));
            }
        };

        match outcome {
            Ok(()) => Ok(State::SessionActive(session)),
            Err(CmdError::Prompt(e)) => self.prompt_failed(e),
            Err(CmdError::Output(e)) => Err(e),
        }
    }

    fn prompt_failed(&mut self, err: PromptError) -> io::Result<State> {
        match err {
            PromptError::Cancelled => {
                writeln!(self.out, "\nExiting.")?;
                Ok(State::Terminated(ExitStatus::Success))
            }
            PromptError::Io(e) => {
                log::error!("prompt failed: {}", e);
                writeln!(self.out, "❌ An unexpected error occurred: {}", e)?;
                Ok(State::Terminated(ExitStatus::Failure))
            }
        }
    }
}
