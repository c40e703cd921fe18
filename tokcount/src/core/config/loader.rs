// src/core/config/loader.rs
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::FileConfig;
use crate::error::{Result, TokcountError};

pub const CONFIG_FILE_NAME: &str = ".tokcount.toml";

/// Loads settings from a .tokcount.toml file starting from the given directory
/// and recursively checking parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for .tokcount.toml files
///
/// # Returns
///
/// * `Ok(FileConfig)` containing the loaded settings, or defaults when no file exists
///
/// # Errors
///
/// This function may return an error if:
/// * The .tokcount.toml file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn discover_config(dir: &Path) -> Result<FileConfig> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return load_config(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(FileConfig::default())
}

/// Reads one config file.
///
/// # Errors
///
/// This function may return an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path).map_err(|e| TokcountError::filesystem(path, e))?;
    let config: FileConfig = toml::from_str(&content).map_err(|e| {
        TokcountError::configuration(format!("Failed to parse {}: {e}", path.display()))
    })?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config.relative_to(path.parent().unwrap_or_else(|| Path::new(""))))
}

impl FileConfig {
    /// Resolves relative paths in the file against the directory holding it.
    fn relative_to(self, base: &Path) -> Self {
        let rebase = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        Self {
            tokenizer_file: self.tokenizer_file.map(rebase),
            output_dir: self.output_dir.map(rebase),
            ..self
        }
    }
}
