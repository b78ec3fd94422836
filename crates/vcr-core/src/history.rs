//! Revision access for a single tracked file
//!
//! Offsets count ancestors behind HEAD: 0 is HEAD itself, 1 its parent,
//! and so on. Content lookups never fail: a revision or path that git
//! cannot resolve comes back as an empty line sequence, which doubles as
//! the "file absent here" sentinel that stops playback at either end of
//! the history.

use crate::git::{self, GitError};
use std::path::PathBuf;

/// Narrow interface over the version-control backend, so the player can
/// be driven by a mock in tests.
pub trait RevisionSource {
    /// Full line sequence of the tracked file `offset` commits behind
    /// HEAD. Empty when the file (or the revision) does not exist there.
    fn lines_at(&self, offset: usize) -> Vec<String>;

    /// One-line label for the revision at `offset`. Only called for
    /// offsets whose content was already confirmed retrievable, so a
    /// failure here is propagated rather than swallowed.
    fn label_at(&self, offset: usize) -> Result<String, GitError>;
}

/// Git-backed history of one file
pub struct FileHistory {
    repo_root: PathBuf,
    /// Path of the tracked file, relative to the repository root
    path: PathBuf,
}

impl FileHistory {
    pub fn new(repo_root: PathBuf, path: PathBuf) -> Self {
        Self { repo_root, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl RevisionSource for FileHistory {
    fn lines_at(&self, offset: usize) -> Vec<String> {
        match git::get_file_at_revision(&self.repo_root, &git::rev_spec(offset), &self.path) {
            Ok(content) => split_lines(&content),
            Err(_) => Vec::new(),
        }
    }

    fn label_at(&self, offset: usize) -> Result<String, GitError> {
        let rev = git::rev_spec(offset);
        let summary = git::get_commit_summary(&self.repo_root, &rev)?;
        Ok(format!("{} {}", rev, summary))
    }
}

/// Strip carriage returns and split on newlines.
///
/// An empty input still yields one (empty) line: a file that exists but
/// is empty must stay distinguishable from the absent-file sentinel.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .replace('\r', "")
        .split('\n')
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_strips_carriage_returns() {
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_lines_empty_content_is_still_present() {
        // One empty line, not the empty (absent) sequence
        assert_eq!(split_lines(""), vec![""]);
    }
}
