// src/core/pipeline.rs
pub mod aggregator;
pub mod reader;
pub mod splitter;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{PipelineOptions, count_file, count_files, count_words};
pub use reader::ChunkReader;
pub use splitter::{PIECE_SIZE, split_pieces};
