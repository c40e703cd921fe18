// tests/integration_tests/collector_test.rs
use super::common::{create_test_file, path_string, setup_corpus};
use anyhow::Result;
use tempfile::TempDir;
use tokcount::{TokcountError, gather_file_paths};

#[test]
fn test_folder_scan_with_suffix() -> Result<()> {
    let corpus = setup_corpus()?;
    let folder = path_string(corpus.path());

    let mut txt = gather_file_paths("", &folder, ".txt")?;
    txt.sort();
    assert_eq!(
        txt,
        vec![
            path_string(&corpus.path().join("fox.txt")),
            path_string(&corpus.path().join("story.txt")),
        ],
        "Only direct *.txt entries should remain"
    );

    let all = gather_file_paths("", &folder, "")?;
    assert_eq!(all.len(), 3, "Empty suffix keeps every *.* entry");

    Ok(())
}

#[test]
fn test_explicit_file_joins_folder_scan() -> Result<()> {
    let corpus = setup_corpus()?;
    let elsewhere = TempDir::new()?;
    let explicit = path_string(&create_test_file(elsewhere.path(), "extra.txt", "extra")?);

    let paths = gather_file_paths(&explicit, &path_string(corpus.path()), ".txt")?;

    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0], explicit, "Explicit path must come first");

    Ok(())
}

#[test]
fn test_explicit_file_filtered_out_by_suffix() -> Result<()> {
    let corpus = setup_corpus()?;
    let explicit = path_string(&corpus.path().join("notes.md"));

    let paths = gather_file_paths(&explicit, "", ".txt")?;

    assert!(paths.is_empty());
    Ok(())
}

#[test]
fn test_overlap_is_a_duplicate() -> Result<()> {
    let corpus = setup_corpus()?;
    let explicit = path_string(&corpus.path().join("fox.txt"));

    let result = gather_file_paths(&explicit, &path_string(corpus.path()), ".txt");

    match result {
        Err(TokcountError::DuplicatePath { path }) => assert_eq!(path, explicit),
        other => panic!("expected a duplicate path error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_overlap_check_is_plain_string_equality() -> Result<()> {
    let corpus = setup_corpus()?;
    // Same file, different spelling: not detected as a duplicate.
    let explicit = format!("{}/./fox.txt", path_string(corpus.path()));

    let paths = gather_file_paths(&explicit, &path_string(corpus.path()), "fox.txt")?;

    assert_eq!(paths.len(), 2);
    Ok(())
}
