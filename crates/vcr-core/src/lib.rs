//! Core playback engine for vcr - replay a file's commit history
//!
//! The engine is split the way the player consumes it: [`git`] wraps the
//! git CLI, [`history`] exposes revision access behind a narrow trait,
//! [`diff`] classifies which rows a revision added, and [`player`] owns
//! the offset/mode state machine that the TUI drives.

pub mod diff;
pub mod git;
pub mod history;
pub mod player;

pub use diff::added_rows;
pub use git::GitError;
pub use history::{FileHistory, RevisionSource};
pub use player::{Command, Dispatch, Mode, Player};
