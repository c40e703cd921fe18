// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokcount::{HfTokenCounter, TokenizerSource};

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// WordLevel model over a tiny vocabulary, split on whitespace and punctuation.
/// Unknown words still count as one `[UNK]` token each.
pub fn create_tokenizer_file(dir: &Path) -> Result<PathBuf> {
    let json = r#"{
  "version": "1.0",
  "truncation": null,
  "padding": null,
  "added_tokens": [],
  "normalizer": null,
  "pre_tokenizer": { "type": "Whitespace" },
  "post_processor": null,
  "decoder": null,
  "model": {
    "type": "WordLevel",
    "vocab": { "[UNK]": 0, "the": 1, "quick": 2, "brown": 3, "fox": 4 },
    "unk_token": "[UNK]"
  }
}"#;
    create_test_file(dir, "tokenizer.json", json)
}

pub fn load_test_tokenizer(dir: &Path) -> Result<HfTokenCounter> {
    let path = create_tokenizer_file(dir)?;
    Ok(HfTokenCounter::load(&TokenizerSource::File(path))?)
}

pub fn setup_corpus() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "fox.txt", "the quick brown fox")?;
    create_test_file(
        temp_dir.path(),
        "story.txt",
        "the fox jumps over the lazy dog.\nthe end",
    )?;
    create_test_file(temp_dir.path(), "notes.md", "# heading\nsome notes")?;
    create_test_file(temp_dir.path(), "README", "no extension here")?;
    create_test_file(temp_dir.path(), ".hidden.txt", "hidden file")?;
    create_test_file(temp_dir.path(), "nested/inner.txt", "not a direct entry")?;

    Ok(temp_dir)
}
