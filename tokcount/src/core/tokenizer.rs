// src/core/tokenizer.rs
pub mod pool;

use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use std::fmt;
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;
use tracing::info;

use crate::error::{Result, TokcountError};

pub use pool::WorkerPool;

/// File fetched from a Hugging Face model repository.
const TOKENIZER_FILE: &str = "tokenizer.json";

/// Counts the subword units each input string decomposes into.
///
/// Implementations must be deterministic for a given input and safe to call
/// from several workers at once.
pub trait TokenCounter: Send + Sync {
    /// Returns one count per piece, in the same order as `pieces`.
    ///
    /// # Errors
    ///
    /// Returns a tokenizer error if any piece cannot be encoded.
    fn count_tokens(&self, pieces: &[&str]) -> Result<Vec<usize>>;
}

/// Where the tokenizer model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerSource {
    /// A local `tokenizer.json`
    File(PathBuf),
    /// A model repository on the Hugging Face Hub
    Hub { model: String, revision: String },
}

impl fmt::Display for TokenizerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Hub { model, revision } => write!(f, "{model}@{revision}"),
        }
    }
}

/// [`TokenCounter`] backed by a Hugging Face `tokenizers` model.
///
/// Special tokens are added to every piece, so a tokenizer that prepends a
/// BOS token counts it once per piece. Truncation and padding from the
/// loaded `tokenizer.json` are switched off.
pub struct HfTokenCounter {
    tokenizer: Tokenizer,
}

impl HfTokenCounter {
    /// # Errors
    ///
    /// Returns a tokenizer error if truncation cannot be disabled.
    pub fn new(mut tokenizer: Tokenizer) -> Result<Self> {
        tokenizer
            .with_truncation(None)
            .map_err(TokcountError::tokenizer)?;
        tokenizer.with_padding(None);
        Ok(Self { tokenizer })
    }

    /// Loads the tokenizer once for the whole run.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The local file is missing or is not a valid `tokenizer.json`
    /// * The model cannot be downloaded from the Hub
    pub fn load(source: &TokenizerSource) -> Result<Self> {
        info!(%source, "loading tokenizer");
        match source {
            TokenizerSource::File(path) => Self::from_file(path),
            TokenizerSource::Hub { model, revision } => Self::from_hub(model, revision),
        }
    }

    /// # Errors
    ///
    /// Returns a tokenizer error if `path` is not a readable `tokenizer.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let tokenizer = Tokenizer::from_file(path)
            .map_err(|e| TokcountError::tokenizer(format!("{}: {e}", path.display())))?;
        Self::new(tokenizer)
    }

    fn from_hub(model: &str, revision: &str) -> Result<Self> {
        let api = Api::new().map_err(TokcountError::tokenizer)?;
        let repo = api.repo(Repo::with_revision(
            model.to_owned(),
            RepoType::Model,
            revision.to_owned(),
        ));
        let path = repo
            .get(TOKENIZER_FILE)
            .map_err(|e| TokcountError::tokenizer(format!("{model}@{revision}: {e}")))?;
        Self::from_file(&path)
    }
}

impl TokenCounter for HfTokenCounter {
    fn count_tokens(&self, pieces: &[&str]) -> Result<Vec<usize>> {
        let encodings = self
            .tokenizer
            .encode_batch(pieces.to_vec(), true)
            .map_err(TokcountError::tokenizer)?;
        Ok(encodings.iter().map(tokenizers::Encoding::len).collect())
    }
}
