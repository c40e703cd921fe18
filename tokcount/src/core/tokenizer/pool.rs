// src/core/tokenizer/pool.rs
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::tokenizer::TokenCounter;
use crate::error::{Result, TokcountError};

/// Fixed-size scatter/gather pool for tokenizing one batch at a time.
///
/// A batch is cut into at most `workers` contiguous partitions, each
/// partition is counted independently, and the counts are stitched back
/// together in the original order. Counting always runs inside the pool, so
/// any parallelism inside the tokenizer is capped at `workers` threads too.
#[derive(Debug)]
pub struct WorkerPool {
    workers: usize,
    pool: ThreadPool,
}

impl WorkerPool {
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `workers` is zero
    /// * The worker threads cannot be spawned
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(TokcountError::configuration("cpu_count must be at least 1"));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("tokcount-worker-{index}"))
            .build()
            .map_err(|e| {
                TokcountError::configuration(format!("Unable to start {workers} workers: {e}"))
            })?;

        Ok(Self { workers, pool })
    }

    /// Counts tokens for every piece, one count per piece in input order.
    ///
    /// # Errors
    ///
    /// Returns the first tokenizer error raised by any partition, or a
    /// tokenizer error if a partition returns the wrong number of counts.
    pub fn count_tokens(&self, counter: &dyn TokenCounter, pieces: &[&str]) -> Result<Vec<usize>> {
        if pieces.is_empty() {
            return Ok(Vec::new());
        }

        let partition_size = pieces.len().div_ceil(self.workers);
        let partitions: Vec<&[&str]> = pieces.chunks(partition_size).collect();

        let counts: Vec<Vec<usize>> = self.pool.install(|| {
            partitions
                .par_iter()
                .map(|partition| count_partition(counter, partition))
                .collect::<Result<Vec<_>>>()
        })?;

        Ok(counts.into_iter().flatten().collect())
    }
}

fn count_partition(counter: &dyn TokenCounter, partition: &[&str]) -> Result<Vec<usize>> {
    let counts = counter.count_tokens(partition)?;
    if counts.len() != partition.len() {
        return Err(TokcountError::tokenizer(format!(
            "tokenizer returned {} counts for {} pieces",
            counts.len(),
            partition.len()
        )));
    }
    Ok(counts)
}
