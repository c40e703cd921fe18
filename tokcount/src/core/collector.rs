// src/core/collector.rs
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, TokcountError};

/// Pattern a folder entry's name must match to become a candidate.
const FOLDER_ENTRY_PATTERN: &str = "*.*";

/// Hidden entries never match, the same as a shell glob.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Resolves the input file list from an explicit path and/or a folder.
///
/// The explicit path comes first, followed by every entry directly inside
/// `folder_path` whose name matches `*.*`, in the order the filesystem
/// reports them. Empty strings mean "not given". The combined list is then
/// narrowed to paths ending with `suffix`.
///
/// # Arguments
///
/// * `file_path` - A single file to count, or `""`
/// * `folder_path` - A folder whose direct entries are candidates, or `""`
/// * `suffix` - Suffix filter applied to the path strings; `""` keeps everything
///
/// # Errors
///
/// This function may return an error if:
/// * The folder cannot be read
/// * The same path string appears in both sources
pub fn gather_file_paths(file_path: &str, folder_path: &str, suffix: &str) -> Result<Vec<String>> {
    let mut candidates = Vec::new();

    if !file_path.is_empty() {
        candidates.push(file_path.to_owned());
    }

    if !folder_path.is_empty() {
        candidates.extend(scan_folder(Path::new(folder_path))?);
    }

    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in &candidates {
        if !seen.insert(candidate.as_str()) {
            return Err(TokcountError::DuplicatePath {
                path: candidate.clone(),
            });
        }
    }

    let filtered: Vec<String> = candidates
        .into_iter()
        .filter(|path| path.ends_with(suffix))
        .collect();

    debug!(count = filtered.len(), suffix, "gathered file paths");
    Ok(filtered)
}

fn scan_folder(folder: &Path) -> Result<Vec<String>> {
    let pattern = Pattern::new(FOLDER_ENTRY_PATTERN)
        .map_err(|e| TokcountError::configuration(format!("Invalid folder pattern: {e}")))?;
    let mut entries = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(folder).to_path_buf();
            TokcountError::filesystem(path, e.into())
        })?;

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches_with(name, MATCH_OPTIONS));
        if matches {
            entries.push(folder.join(entry.file_name()).to_string_lossy().into_owned());
        }
    }

    Ok(entries)
}
