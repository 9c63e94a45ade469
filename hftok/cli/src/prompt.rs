//! Interactive prompts behind a trait, so the session can be driven by a
//! terminal or by a script in tests.

use std::fmt;
use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Editor, Input, Select};
use thiserror::Error;

pub type PromptResult<T> = Result<T, PromptError>;

#[derive(Error, Debug)]
pub enum PromptError {
    /// The user interrupted the prompt (Ctrl-C, Esc, end of input).
    #[error("prompt cancelled")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Io(#[from] io::Error),
}

/// Source of user answers.
pub trait Prompter {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, message: &str, items: &[String]) -> PromptResult<usize>;
    /// Read a single line of text. May be empty.
    fn input(&mut self, message: &str) -> PromptResult<String>;
    /// Read text that may span several lines. May be empty.
    fn long_input(&mut self, message: &str) -> PromptResult<String>;
}

/// Ask for one of `options`, shown by their `Display` text, and hand back the
/// option itself rather than its label.
pub fn choose<P, T>(prompter: &mut P, message: &str, options: &[T]) -> PromptResult<T>
where
    P: Prompter + ?Sized,
    T: Copy + fmt::Display,
{
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let index = prompter.select(message, &labels)?;
    options.get(index).copied().ok_or_else(|| {
        PromptError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("selection {} is out of range", index),
        ))
    })
}

/// Prompts on the controlling terminal (stderr).
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    /// Collect long text in `$VISUAL`/`$EDITOR` instead of a single line.
    use_editor: bool,
}

impl TerminalPrompter {
    pub fn new(use_editor: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            use_editor,
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> PromptResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(from_dialoguer)?
            .ok_or(PromptError::Cancelled)
    }

    fn input(&mut self, message: &str) -> PromptResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(from_dialoguer)
    }

    fn long_input(&mut self, message: &str) -> PromptResult<String> {
        if !self.use_editor {
            return self.input(message);
        }
        eprintln!("{} (opening editor, save and close to continue)", message);
        // An editor closed without saving counts as no input. The text is
        // passed on exactly as saved, trailing newlines included.
        let text = Editor::new()
            .trim_newlines(false)
            .edit("")
            .map_err(from_dialoguer)?;
        Ok(text.unwrap_or_default())
    }
}

fn from_dialoguer(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(e) => match e.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => PromptError::Cancelled,
            _ => PromptError::Io(e),
        },
    }
}
