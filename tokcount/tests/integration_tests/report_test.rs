// tests/integration_tests/report_test.rs
use super::common::{load_test_tokenizer, path_string, setup_corpus};
use anyhow::Result;
use std::fs;
use tokcount::{PipelineOptions, Report, WorkerPool, count_files, gather_file_paths};

#[test]
fn test_report_from_corpus() -> Result<()> {
    let corpus = setup_corpus()?;
    let counter = load_test_tokenizer(corpus.path())?;
    let mut paths = gather_file_paths("", &path_string(corpus.path()), ".txt")?;
    paths.sort();

    let records = count_files(&paths, &counter, &WorkerPool::new(2)?, PipelineOptions::new(4096))?;
    let report = Report::new(records);

    let summary = report.summary();
    assert_eq!(summary.word_count, 12);
    assert_eq!(summary.token_count, 14);
    let size_sum: f64 = report.records().iter().map(|r| r.file_size_mb).sum();
    assert!((summary.file_size_mb - size_sum).abs() < f64::EPSILON);

    let out_dir = corpus.path().join("out");
    let (per_file, summary_path) = report.write_csv(&out_dir)?;

    let per_file_csv = fs::read_to_string(per_file)?;
    let mut lines = per_file_csv.lines();
    assert_eq!(
        lines.next(),
        Some("file_path,word_count,token_count,file_size(MB)")
    );
    assert_eq!(lines.count(), 2);

    let summary_csv = fs::read_to_string(summary_path)?;
    assert!(summary_csv.starts_with("word_count,token_count,file_size(MB)\n12,14,"));
    assert!(!summary_csv.contains("file_path"));

    Ok(())
}
