// src/report.rs
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, TokcountError};
use crate::models::{FileRecord, SummaryRecord};

pub const PER_FILE_CSV: &str = "token_count.csv";
pub const SUMMARY_CSV: &str = "token_count_sum.csv";

/// Per-file rows plus their column-wise sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    records: Vec<FileRecord>,
    summary: SummaryRecord,
}

impl Report {
    #[must_use]
    pub fn new(records: Vec<FileRecord>) -> Self {
        let summary = SummaryRecord::from_records(&records);
        Self { records, summary }
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    #[must_use]
    pub const fn summary(&self) -> &SummaryRecord {
        &self.summary
    }

    /// Writes `token_count.csv` and `token_count_sum.csv` into `dir`,
    /// creating it if needed. Returns both paths.
    ///
    /// Floats use the shortest round-trip form, so very small sizes are
    /// written as `9.537e-7` rather than a zero-padded exponent like `9.537e-07`.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The output directory cannot be created
    /// * Either CSV file cannot be written
    pub fn write_csv(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(dir).map_err(|e| TokcountError::filesystem(dir, e))?;

        let per_file = dir.join(PER_FILE_CSV);
        write_rows(&per_file, &FileRecord::HEADERS, &self.records)?;

        let summary = dir.join(SUMMARY_CSV);
        write_rows(&summary, &SummaryRecord::HEADERS, std::slice::from_ref(&self.summary))?;

        info!(per_file = %per_file.display(), summary = %summary.display(), "wrote reports");
        Ok((per_file, summary))
    }

    /// Renders the per-file table followed by the summed columns.
    #[must_use]
    pub fn render(&self) -> String {
        let [path_header, words_header, tokens_header, size_header] = FileRecord::HEADERS;
        let path_width = self
            .records
            .iter()
            .map(|r| r.file_path.chars().count())
            .max()
            .unwrap_or(0)
            .max(path_header.len());

        let header = format!(
            "{path_header:<path_width$}  {words_header:>12}  {tokens_header:>12}  {size_header:>16}"
        );
        let rows = self.records.iter().map(|record| {
            format!(
                "{:<path_width$}  {:>12}  {:>12}  {:>16.10}",
                record.file_path, record.word_count, record.token_count, record.file_size_mb
            )
        });
        let totals = [
            String::new(),
            format!("{words_header:<14}{}", self.summary.word_count),
            format!("{tokens_header:<14}{}", self.summary.token_count),
            format!("{size_header:<14}{:.10}", self.summary.file_size_mb),
        ];

        let mut lines: Vec<String> = vec![header];
        lines.extend(rows);
        lines.extend(totals);
        lines.join("\n") + "\n"
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// Always writes the header row, even when there are no records.
fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let output_error = |source: csv::Error| TokcountError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(output_error)?;
    writer.write_record(headers).map_err(output_error)?;
    for row in rows {
        writer.serialize(row).map_err(output_error)?;
    }
    writer.flush().map_err(|e| output_error(e.into()))?;
    Ok(())
}
