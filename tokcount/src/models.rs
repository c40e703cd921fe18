// src/models.rs
mod file_record;
mod summary_record;

pub use file_record::FileRecord;
pub use summary_record::SummaryRecord;
