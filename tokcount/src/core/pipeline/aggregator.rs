// src/core/pipeline/aggregator.rs
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::core::pipeline::reader::ChunkReader;
use crate::core::pipeline::splitter::{PIECE_SIZE, split_pieces};
use crate::core::tokenizer::{TokenCounter, WorkerPool};
use crate::error::{Result, TokcountError};
use crate::models::FileRecord;
use crate::utils::bytes_to_megabytes;

/// Sizes used while streaming one file through the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Characters read from disk per chunk
    pub chunk_size: usize,
    /// Characters per tokenizer input
    pub piece_size: usize,
}

impl PipelineOptions {
    #[must_use]
    pub const fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            piece_size: PIECE_SIZE,
        }
    }
}

/// Number of segments produced by splitting on the single space character.
///
/// Tabs and newlines do not separate words, and an empty segment still
/// counts, so every chunk contributes at least one word.
#[must_use]
pub fn count_words(chunk: &str) -> u64 {
    u64::try_from(chunk.split(' ').count()).unwrap_or(u64::MAX)
}

/// Streams one file through the pipeline and returns its counts.
///
/// Each chunk adds its space-separated segment count to the word total and
/// the token counts of its pieces to the token total. A word straddling two
/// chunks is therefore counted twice. The file size is read after the
/// stream is exhausted.
///
/// # Arguments
///
/// * `path` - The file to count
/// * `counter` - Tokenizer shared by every file of the run
/// * `pool` - Workers used to tokenize the pieces of one chunk
/// * `options` - Chunk and piece sizes
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened, read or decoded as UTF-8
/// * The tokenizer fails on any piece
/// * The file's metadata cannot be read
pub fn count_file(
    path: &Path,
    counter: &dyn TokenCounter,
    pool: &WorkerPool,
    options: PipelineOptions,
) -> Result<FileRecord> {
    info!(path = %path.display(), "counting file");

    let mut word_count: u64 = 0;
    let mut token_count: u64 = 0;

    let reader = ChunkReader::open(path, options.chunk_size)?;
    for (chunk_index, chunk) in reader.enumerate() {
        let chunk = chunk.map_err(|e| TokcountError::filesystem(path, e))?;

        word_count = word_count.saturating_add(count_words(&chunk));

        let pieces = split_pieces(&chunk, options.piece_size);
        let counts = pool.count_tokens(counter, &pieces)?;
        let chunk_tokens = counts
            .iter()
            .fold(0_u64, |sum, &count| sum.saturating_add(count as u64));
        token_count = token_count.saturating_add(chunk_tokens);

        debug!(pieces = pieces.len(), tokens = chunk_tokens, "chunk tokenized");
        info!("chunk {chunk_index} completed");
    }

    let size = fs::metadata(path)
        .map_err(|e| TokcountError::filesystem(path, e))?
        .len();

    Ok(FileRecord {
        file_path: path.to_string_lossy().into_owned(),
        word_count,
        token_count,
        file_size_mb: bytes_to_megabytes(size),
    })
}

/// Counts every path in order. The first failure aborts the whole batch.
///
/// # Errors
///
/// Returns the first error raised by [`count_file`].
pub fn count_files(
    paths: &[String],
    counter: &dyn TokenCounter,
    pool: &WorkerPool,
    options: PipelineOptions,
) -> Result<Vec<FileRecord>> {
    paths
        .iter()
        .map(|path| count_file(Path::new(path), counter, pool, options))
        .collect()
}
