//! Added-line detection between two revisions of a file
//!
//! The player only needs to know which rows of the newer revision were
//! inserted relative to the one-step-older revision, so the diff result
//! collapses to a set of row indices.

use imara_diff::{Algorithm, Diff, InternedInput};
use rustc_hash::FxHashSet;

/// Row indices in `current` that are insertions relative to `older`.
///
/// Rows are 0-based indices into `current`; unchanged and deleted lines
/// never appear in the result. When either sequence is empty the file is
/// absent on that side and there is no comparator to diff against, so
/// nothing is flagged; a file's first appearance shows no highlight.
pub fn added_rows(older: &[String], current: &[String]) -> FxHashSet<usize> {
    let mut rows = FxHashSet::default();
    if older.is_empty() || current.is_empty() {
        return rows;
    }

    let mut input: InternedInput<&str> = InternedInput::new("", "");
    input.update_before(older.iter().map(String::as_str));
    input.update_after(current.iter().map(String::as_str));

    let mut diff = Diff::compute(Algorithm::Histogram, &input);
    diff.postprocess_lines(&input);

    for hunk in diff.hunks() {
        for row in hunk.after.start..hunk.after.end {
            rows.insert(row as usize);
        }
    }
    rows
}
