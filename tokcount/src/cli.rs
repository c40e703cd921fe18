// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::core::collector::gather_file_paths;
use crate::core::config::{RawOptions, RunConfig, discover_config, load_config};
use crate::core::pipeline::{PipelineOptions, count_files};
use crate::core::tokenizer::{HfTokenCounter, WorkerPool};
use crate::error::TokcountError;
use crate::report::Report;

/// Count words and tokenizer tokens for a file and/or every file in a folder.
///
/// Writes token_count.csv and token_count_sum.csv and prints both tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read and count tokens for this file
    #[arg(long = "file_path", default_value = "")]
    pub file_path: String,

    /// Read and count tokens for all files directly inside this folder
    #[arg(long = "folder_path", default_value = "")]
    pub folder_path: String,

    /// Keep only file paths ending with this suffix
    #[arg(long = "file_path_ends_with", default_value = "")]
    pub file_path_ends_with: String,

    /// Characters read per chunk (parsed as a number and truncated)
    #[arg(long = "chunk_size", default_value = "4096")]
    pub chunk_size: String,

    /// Number of workers used to tokenize the pieces of a chunk
    #[arg(long = "cpu_count", default_value = "1")]
    pub cpu_count: String,

    /// Hugging Face model id to load tokenizer.json from
    #[arg(long, conflicts_with = "tokenizer_file")]
    pub tokenizer: Option<String>,

    /// Model revision on the Hugging Face Hub
    #[arg(long)]
    pub revision: Option<String>,

    /// Local tokenizer.json to use instead of downloading one
    #[arg(long = "tokenizer_file")]
    pub tokenizer_file: Option<PathBuf>,

    /// Directory the CSV reports are written to
    #[arg(long = "output_dir")]
    pub output_dir: Option<PathBuf>,

    /// Config file to use instead of searching for .tokcount.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn into_raw(self) -> RawOptions {
        RawOptions {
            file_path: self.file_path,
            folder_path: self.folder_path,
            file_path_ends_with: self.file_path_ends_with,
            chunk_size: self.chunk_size,
            cpu_count: self.cpu_count,
            tokenizer: self.tokenizer,
            revision: self.revision,
            tokenizer_file: self.tokenizer_file,
            output_dir: self.output_dir,
        }
    }
}

/// Runs the whole count: resolve settings, gather paths, count each file,
/// then write and print the report. Nothing is written unless every file
/// succeeds.
///
/// # Errors
///
/// Any configuration, filesystem, tokenizer or output failure aborts the run.
pub fn run(args: Args) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => discover_config(&env::current_dir()?)?,
    };
    let config = RunConfig::resolve(args.into_raw(), file_config)?;

    info!(
        "file_path: {} folder_path: {} file_path_ends_with: {} chunk_size: {:e} cpu_count: {}",
        config.file_path, config.folder_path, config.suffix, config.chunk_size, config.cpu_count
    );

    let paths = gather_file_paths(&config.file_path, &config.folder_path, &config.suffix)
        .with_context(|| format!("Failed to gather files from folder: {}", config.folder_path))?;
    if paths.is_empty() {
        return Err(TokcountError::EmptyInput {
            suffix: config.suffix,
        }
        .into());
    }

    let pool = WorkerPool::new(config.cpu_count)?;
    let counter = HfTokenCounter::load(&config.tokenizer)
        .with_context(|| format!("Failed to load tokenizer: {}", config.tokenizer))?;

    let records = count_files(
        &paths,
        &counter,
        &pool,
        PipelineOptions::new(config.chunk_size),
    )?;
    let report = Report::new(records);

    report.write_csv(&config.output_dir).with_context(|| {
        format!(
            "Failed to write reports to directory: {}",
            config.output_dir.display()
        )
    })?;
    report.print();

    Ok(())
}
