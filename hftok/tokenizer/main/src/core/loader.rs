//! Resolves model identifiers to loaded tokenizers: local files and
//! directories first, then the HuggingFace Hub.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::LevelFilter;

use crate::api::error::{TokenizerError, TokenizerResult};
use crate::api::types::ModelId;
use crate::core::hf::HFTokenizer;
use crate::core::quiet::with_log_level;
use crate::spi::contract::{Tokenizer, TokenizerLoader};

const TOKENIZER_FILE: &str = "tokenizer.json";

/// Hub HTTP statuses that mean "no such (accessible) repository or file".
const MISSING_STATUSES: &[u16] = &[401, 403, 404];

/// Loads `tokenizer.json` from a local path or a HuggingFace Hub repository.
#[derive(Debug, Clone)]
pub struct HubLoader {
    /// Hub cache directory; `None` uses the hf-hub default.
    cache_dir: Option<PathBuf>,
    /// API token (optional, for gated or private models)
    token: Option<String>,
    /// Show download progress bars.
    progress: bool,
}

impl Default for HubLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl HubLoader {
    /// Create a loader using the default cache and `HF_TOKEN` from the environment.
    pub fn new() -> Self {
        Self {
            cache_dir: None,
            token: std::env::var("HF_TOKEN").ok(),
            progress: true,
        }
    }

    /// Use a custom hub cache directory.
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    /// Set API token for gated or private models.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Find the `tokenizer.json` for `model`, downloading it if needed.
    ///
    /// Three cases:
    ///  1. Local file: used as-is
    ///  2. Local directory: must contain `tokenizer.json`
    ///  3. Anything else: treated as a Hub repository ID
    fn resolve(&self, model: &ModelId) -> TokenizerResult<PathBuf> {
        let path = Path::new(model.as_str());

        if path.is_file() {
            Ok(path.to_path_buf())
        } else if path.is_dir() {
            let candidate = path.join(TOKENIZER_FILE);
            if candidate.is_file() {
                Ok(candidate)
            } else {
                Err(TokenizerError::ModelNotFound(model.to_string()))
            }
        } else {
            self.fetch_from_hub(model)
        }
    }

    /// Build the hf-hub sync API, passing through the token and cache overrides.
    ///
    /// Without an explicit token the builder keeps the one saved by
    /// `huggingface-cli login` (read from next to the cache directory).
    fn hf_sync_api(&self) -> TokenizerResult<hf_hub::api::sync::Api> {
        let mut builder = match self.cache_dir {
            Some(ref dir) => hf_hub::api::sync::ApiBuilder::from_cache(hf_hub::Cache::new(dir.clone())),
            None => hf_hub::api::sync::ApiBuilder::new(),
        }
        .with_progress(self.progress);
        if let Some(ref token) = self.token {
            builder = builder.with_token(Some(token.clone()));
        }
        builder
            .build()
            .map_err(|e| TokenizerError::LoadFailed(format!("Failed to create hf-hub API: {}", e)))
    }

    fn fetch_from_hub(&self, model: &ModelId) -> TokenizerResult<PathBuf> {
        let api = self.hf_sync_api()?;
        api.model(model.to_string())
            .get(TOKENIZER_FILE)
            .map_err(|e| classify_hub_error(model, &e.to_string()))
    }
}

/// hf-hub reports HTTP failures only through its error text
/// (`...: status code 404`), so the status is recovered from the message.
fn classify_hub_error(model: &ModelId, message: &str) -> TokenizerError {
    let missing = MISSING_STATUSES
        .iter()
        .any(|code| message.contains(&format!("status code {}", code)));
    if missing {
        TokenizerError::ModelNotFound(model.to_string())
    } else {
        TokenizerError::LoadFailed(format!("{}: {}", model, message))
    }
}

impl TokenizerLoader for HubLoader {
    fn load(&self, model: &ModelId) -> TokenizerResult<Box<dyn Tokenizer>> {
        let start = Instant::now();
        let loaded = with_log_level(LevelFilter::Error, || {
            let path = self.resolve(model)?;
            let tokenizer = HFTokenizer::from_file(&path)?;
            Ok::<_, TokenizerError>((path, tokenizer))
        });

        match loaded {
            Ok((path, tokenizer)) => {
                log::debug!(
                    "loaded {} from {} in {:.3}s",
                    model,
                    path.display(),
                    start.elapsed().as_secs_f64()
                );
                Ok(Box::new(tokenizer))
            }
            Err(e) => {
                log::debug!("failed to load {}: {}", model, e);
                Err(e)
            }
        }
    }
}
