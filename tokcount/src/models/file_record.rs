// src/models/file_record.rs
use serde::Serialize;

/// Counts for one input file, serialized as one row of `token_count.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub file_path: String,
    pub word_count: u64,
    pub token_count: u64,
    #[serde(rename = "file_size(MB)")]
    pub file_size_mb: f64,
}

impl FileRecord {
    pub const HEADERS: [&'static str; 4] =
        ["file_path", "word_count", "token_count", "file_size(MB)"];
}
