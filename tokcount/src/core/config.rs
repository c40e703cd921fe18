// src/core/config.rs
pub mod loader;

use serde::Deserialize;
use std::path::PathBuf;

use crate::core::tokenizer::TokenizerSource;
use crate::error::{Result, TokcountError};

pub use loader::{CONFIG_FILE_NAME, discover_config, load_config};

pub const DEFAULT_TOKENIZER: &str = "hf-internal-testing/llama-tokenizer";
pub const DEFAULT_REVISION: &str = "main";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Settings read from a `.tokcount.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Hugging Face model id to fetch `tokenizer.json` from
    pub tokenizer: Option<String>,
    pub revision: Option<String>,
    /// Local `tokenizer.json`; takes precedence over `tokenizer`
    pub tokenizer_file: Option<PathBuf>,
    /// Directory the CSV reports are written to
    pub output_dir: Option<PathBuf>,
}

/// Command-line values before validation. Empty or absent values fall back
/// to the config file and then to the built-in defaults.
#[derive(Debug, Default, Clone)]
pub struct RawOptions {
    pub file_path: String,
    pub folder_path: String,
    pub file_path_ends_with: String,
    pub chunk_size: String,
    pub cpu_count: String,
    pub tokenizer: Option<String>,
    pub revision: Option<String>,
    pub tokenizer_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Fully validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub file_path: String,
    pub folder_path: String,
    pub suffix: String,
    pub chunk_size: usize,
    pub cpu_count: usize,
    pub tokenizer: TokenizerSource,
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Validates the command-line values and layers them over `file`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `chunk_size` or `cpu_count` is malformed.
    pub fn resolve(raw: RawOptions, file: FileConfig) -> Result<Self> {
        let chunk_size = parse_chunk_size(&raw.chunk_size)?;
        let cpu_count = parse_cpu_count(&raw.cpu_count)?;

        let tokenizer = match raw.tokenizer_file.or(file.tokenizer_file) {
            Some(path) if raw.tokenizer.is_none() => TokenizerSource::File(path),
            _ => TokenizerSource::Hub {
                model: raw
                    .tokenizer
                    .or(file.tokenizer)
                    .unwrap_or_else(|| DEFAULT_TOKENIZER.to_owned()),
                revision: raw
                    .revision
                    .or(file.revision)
                    .unwrap_or_else(|| DEFAULT_REVISION.to_owned()),
            },
        };

        let output_dir = raw
            .output_dir
            .or(file.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            file_path: raw.file_path,
            folder_path: raw.folder_path,
            suffix: raw.file_path_ends_with,
            chunk_size,
            cpu_count,
            tokenizer,
            output_dir,
        })
    }
}

/// Parses `chunk_size` as a float and truncates it, so `"4096"`, `"4e3"` and
/// `"4096.9"` are all accepted.
///
/// # Errors
///
/// Returns a configuration error unless the value is a finite number of at least 1.
pub fn parse_chunk_size(value: &str) -> Result<usize> {
    let parsed: f64 = value.trim().parse().map_err(|_| {
        TokcountError::configuration(format!("chunk_size must be a number, got {value:?}"))
    })?;

    if !parsed.is_finite() || parsed < 1.0 {
        return Err(TokcountError::configuration(format!(
            "chunk_size must be at least 1, got {value:?}"
        )));
    }

    Ok(parsed.trunc() as usize)
}

/// # Errors
///
/// Returns a configuration error unless the value is an integer of at least 1.
pub fn parse_cpu_count(value: &str) -> Result<usize> {
    let parsed: usize = value.trim().parse().map_err(|_| {
        TokcountError::configuration(format!("cpu_count must be an integer, got {value:?}"))
    })?;

    if parsed == 0 {
        return Err(TokcountError::configuration("cpu_count must be at least 1"));
    }

    Ok(parsed)
}
