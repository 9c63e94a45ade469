mod cmd;
mod input;
mod prompt;
mod session;
#[cfg(test)]
mod testing;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hftok_tokenizer::HubLoader;

use prompt::TerminalPrompter;
use session::{App, SessionOptions};

/// hftok: explore how HuggingFace tokenizers split text.
#[derive(Parser)]
#[command(name = "hftok", version, about)]
struct Cli {
    /// Override the HuggingFace Hub cache directory.
    #[arg(long, value_name = "PATH")]
    cache_dir: Option<PathBuf>,

    /// HuggingFace API token for gated or private models (defaults to $HF_TOKEN).
    #[arg(long)]
    token: Option<String>,

    /// Type text to tokenize on a single line instead of opening $EDITOR.
    #[arg(long)]
    no_editor: bool,

    /// Exit with status 1 if the first model name entered is empty.
    #[arg(long)]
    strict: bool,
}

fn build_loader(cli: &Cli) -> HubLoader {
    let mut loader = HubLoader::new();
    if let Some(ref dir) = cli.cache_dir {
        loader = loader.with_cache_dir(dir);
    }
    if let Some(ref token) = cli.token {
        loader = loader.with_token(token);
    }
    loader
}

/// Restore the cursor and say goodbye on stderr. Never touches stdout, so a
/// session in the middle of writing cannot block it.
fn announce_interrupt() {
    let term = console::Term::stderr();
    let _ = term.show_cursor();
    let _ = term.write_line("\nExiting.");
}

/// Ctrl-C outside a raw-mode prompt (editor, download) ends the run like a
/// cancelled prompt would.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        announce_interrupt();
        std::process::exit(0);
    })
    .context("Failed to install Ctrl-C handler")
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    install_interrupt_handler()?;

    let loader = build_loader(&cli);
    let mut prompter = TerminalPrompter::new(!cli.no_editor);
    let options = SessionOptions { strict: cli.strict };

    // Unlocked handle: each write takes the lock briefly.
    let status = App::new(&mut prompter, &loader, io::stdout(), options)
        .run()
        .context("Failed to write to stdout")?;
    log::debug!("session ended with {:?}", status);
    Ok(status.into())
}
