// src/models/summary_record.rs
use serde::Serialize;

use crate::models::FileRecord;

/// Column-wise sum of every [`FileRecord`]. There is no `file_path` column.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub word_count: u64,
    pub token_count: u64,
    #[serde(rename = "file_size(MB)")]
    pub file_size_mb: f64,
}

impl SummaryRecord {
    pub const HEADERS: [&'static str; 3] = ["word_count", "token_count", "file_size(MB)"];

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word_count: 0,
            token_count: 0,
            file_size_mb: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_records(records: &[FileRecord]) -> Self {
        records.iter().fold(Self::new(), |mut sum, record| {
            sum.word_count = sum.word_count.saturating_add(record.word_count);
            sum.token_count = sum.token_count.saturating_add(record.token_count);
            sum.file_size_mb += record.file_size_mb;
            sum
        })
    }
}
