// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

pub use crate::core::collector::gather_file_paths;
pub use crate::core::config::{
    FileConfig, RawOptions, RunConfig, discover_config, load_config,
};
pub use crate::core::pipeline::{
    ChunkReader, PIECE_SIZE, PipelineOptions, count_file, count_files, split_pieces,
};
pub use crate::core::tokenizer::{HfTokenCounter, TokenCounter, TokenizerSource, WorkerPool};
pub use cli::{Args, run};
pub use error::{Result, TokcountError};
pub use models::{FileRecord, SummaryRecord};
pub use report::Report;
