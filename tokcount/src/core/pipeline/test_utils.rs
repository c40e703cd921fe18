use anyhow::Result;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::core::tokenizer::TokenCounter;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// One token per character plus a leading marker, like a tokenizer that adds BOS.
pub struct CharCounter;

impl TokenCounter for CharCounter {
    fn count_tokens(&self, pieces: &[&str]) -> crate::Result<Vec<usize>> {
        Ok(pieces
            .iter()
            .map(|piece| piece.chars().count().saturating_add(1))
            .collect())
    }
}

/// Offline WordLevel tokenizer with whitespace pre-tokenization.
pub fn word_level_tokenizer_json(words: &[&str]) -> String {
    word_level_tokenizer_json_with(words, "null", "null")
}

/// Same as [`word_level_tokenizer_json`] with raw JSON for the
/// `truncation` and `padding` sections.
pub fn word_level_tokenizer_json_with(words: &[&str], truncation: &str, padding: &str) -> String {
    let mut vocab: HashMap<String, u32> = HashMap::new();
    vocab.insert(String::from("[UNK]"), 0);
    vocab.insert(String::from("[PAD]"), 1);
    for (id, word) in (2_u32..).zip(words) {
        vocab.insert((*word).to_owned(), id);
    }
    let vocab = vocab
        .iter()
        .map(|(word, id)| format!("\"{word}\": {id}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"{{
  "version": "1.0",
  "truncation": {truncation},
  "padding": {padding},
  "added_tokens": [],
  "normalizer": null,
  "pre_tokenizer": {{ "type": "Whitespace" }},
  "post_processor": null,
  "decoder": null,
  "model": {{ "type": "WordLevel", "vocab": {{ {vocab} }}, "unk_token": "[UNK]" }}
}}"#
    )
}
