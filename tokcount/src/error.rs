// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for tokcount operations
pub type Result<T> = std::result::Result<T, TokcountError>;

/// Every failure is fatal for the run; nothing is caught or retried internally.
#[derive(Debug, Error)]
pub enum TokcountError {
    /// Malformed flag value, config file or worker pool settings
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// The explicit file path also showed up in the folder scan
    #[error(
        "Duplicated file path found, maybe because file_path and files in folder_path overlap: {path}"
    )]
    DuplicatePath { path: String },

    /// The suffix filter left nothing to process
    #[error("No file path satisfies the suffix filter {suffix:?}")]
    EmptyInput { suffix: String },

    #[error("Failed to read {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Tokenizer failure: {message}")]
    Tokenizer { message: String },

    #[error("Failed to write report {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl TokcountError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn tokenizer(message: impl ToString) -> Self {
        Self::Tokenizer {
            message: message.to_string(),
        }
    }
}
