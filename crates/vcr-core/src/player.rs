//! Playback state machine over a file's revision history

use crate::diff::added_rows;
use crate::git::GitError;
use crate::history::RevisionSource;
use rustc_hash::FxHashSet;

/// What the player is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Waiting for a keypress
    #[default]
    Idle,
    /// Auto-advancing toward HEAD
    Playing,
    /// Auto-advancing toward the start of history
    Rewinding,
}

/// A playback command, either mapped from a key or synthesized while
/// playing/rewinding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Rewind,
    StepForward,
    StepBackward,
    Quit,
}

/// Result of dispatching a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep looping
    Continue,
    /// The move ran into a history boundary; offset unchanged, any
    /// auto-advance mode canceled, the UI should alert
    Blocked,
    /// Exit requested
    Quit,
}

/// Player for stepping a single file through its history.
///
/// Holds the only state that survives an iteration: the offset behind
/// HEAD and the playback mode. Everything else (line text, added rows,
/// the revision label) is recomputed by [`refresh`](Player::refresh)
/// at the top of every iteration.
pub struct Player<S: RevisionSource> {
    source: S,
    offset: usize,
    mode: Mode,
    /// Lines of the revision at `offset`
    lines: Vec<String>,
    /// Lines one step older, kept for the diff and the rewind boundary
    /// check so a single iteration never queries the same offset twice
    older: Vec<String>,
    /// Rows of `lines` inserted relative to `older`
    added: FxHashSet<usize>,
    /// Label for the revision at `offset`
    label: String,
}

impl<S: RevisionSource> Player<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            offset: 0,
            mode: Mode::Idle,
            lines: Vec::new(),
            older: Vec::new(),
            added: FxHashSet::default(),
            label: String::new(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn added(&self) -> &FxHashSet<usize> {
        &self.added
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Re-fetch both revisions for the current offset and re-diff.
    ///
    /// Must run before [`apply`](Player::apply) each iteration: the
    /// dispatch logic reads the fetched `older` sequence to decide
    /// whether a backward move is possible.
    pub fn refresh(&mut self) -> Result<(), GitError> {
        self.lines = self.source.lines_at(self.offset);
        self.older = self.source.lines_at(self.offset + 1);
        self.added = added_rows(&self.older, &self.lines);
        self.label = self.source.label_at(self.offset)?;
        Ok(())
    }

    /// The command to synthesize instead of reading a key, if any
    pub fn auto_command(&self) -> Option<Command> {
        match self.mode {
            Mode::Rewinding => Some(Command::StepBackward),
            Mode::Playing => Some(Command::StepForward),
            Mode::Idle => None,
        }
    }

    /// Whether this iteration should pause before advancing.
    ///
    /// Auto-advance is throttled only on steps that introduced added
    /// rows; commits that touched nothing visible fly by.
    pub fn wants_delay(&self) -> bool {
        matches!(self.mode, Mode::Playing | Mode::Rewinding) && !self.added.is_empty()
    }

    pub fn apply(&mut self, command: Command) -> Dispatch {
        match command {
            Command::Play => {
                self.mode = Mode::Playing;
                Dispatch::Continue
            }
            Command::Rewind => {
                self.mode = Mode::Rewinding;
                Dispatch::Continue
            }
            Command::StepBackward => {
                if self.older.is_empty() {
                    self.mode = Mode::Idle;
                    Dispatch::Blocked
                } else {
                    self.offset += 1;
                    Dispatch::Continue
                }
            }
            Command::StepForward => {
                if self.offset > 0 && !self.source.lines_at(self.offset - 1).is_empty() {
                    self.offset -= 1;
                    Dispatch::Continue
                } else {
                    self.mode = Mode::Idle;
                    Dispatch::Blocked
                }
            }
            Command::Quit => Dispatch::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Revision source backed by a vector: index = offset behind HEAD
    struct FakeHistory {
        revisions: Vec<Vec<String>>,
    }

    impl FakeHistory {
        fn new(revisions: &[&[&str]]) -> Self {
            Self {
                revisions: revisions
                    .iter()
                    .map(|rev| rev.iter().map(|line| line.to_string()).collect())
                    .collect(),
            }
        }
    }

    impl RevisionSource for FakeHistory {
        fn lines_at(&self, offset: usize) -> Vec<String> {
            self.revisions.get(offset).cloned().unwrap_or_default()
        }

        fn label_at(&self, offset: usize) -> Result<String, GitError> {
            Ok(format!("HEAD~{} abc1234 commit {}", offset, offset))
        }
    }

    /// HEAD is ["a","x","b","y"], growing one line per commit
    fn make_player() -> Player<FakeHistory> {
        Player::new(FakeHistory::new(&[
            &["a", "x", "b", "y"],
            &["a", "x", "b"],
            &["a", "b"],
        ]))
    }

    #[test]
    fn test_refresh_flags_inserted_row() {
        let mut player = make_player();
        player.offset = 1;
        player.refresh().unwrap();
        assert_eq!(player.lines(), ["a", "x", "b"]);
        assert_eq!(player.added().len(), 1);
        assert!(player.added().contains(&1));
        assert_eq!(player.label(), "HEAD~1 abc1234 commit 1");
    }

    #[test]
    fn test_refresh_flags_appended_row() {
        let mut player = make_player();
        player.refresh().unwrap();
        assert_eq!(player.added().len(), 1);
        assert!(player.added().contains(&3));
    }

    #[test]
    fn test_refresh_at_oldest_revision_flags_nothing() {
        // No older comparator exists, so nothing reads as added
        let mut player = make_player();
        player.offset = 2;
        player.refresh().unwrap();
        assert!(player.added().is_empty());
    }

    #[test]
    fn test_forward_at_head_blocks_and_cancels_playing() {
        let mut player = make_player();
        player.mode = Mode::Playing;
        player.refresh().unwrap();

        assert_eq!(player.apply(Command::StepForward), Dispatch::Blocked);
        assert_eq!(player.offset(), 0);
        assert_eq!(player.mode(), Mode::Idle);
    }

    #[test]
    fn test_backward_at_oldest_blocks_and_cancels_rewinding() {
        let mut player = make_player();
        player.offset = 2;
        player.mode = Mode::Rewinding;
        player.refresh().unwrap();

        assert_eq!(player.apply(Command::StepBackward), Dispatch::Blocked);
        assert_eq!(player.offset(), 2);
        assert_eq!(player.mode(), Mode::Idle);
    }

    #[test]
    fn test_blocked_moves_from_idle_stay_idle() {
        let mut player = make_player();
        player.refresh().unwrap();
        assert_eq!(player.apply(Command::StepForward), Dispatch::Blocked);
        assert_eq!(player.mode(), Mode::Idle);
    }

    #[test]
    fn test_play_advances_to_head_then_goes_idle() {
        let mut player = make_player();
        player.offset = 2;
        player.refresh().unwrap();
        assert_eq!(player.apply(Command::Play), Dispatch::Continue);
        assert_eq!(player.mode(), Mode::Playing);

        let mut offsets = Vec::new();
        loop {
            player.refresh().unwrap();
            let command = player.auto_command().expect("playing synthesizes input");
            match player.apply(command) {
                Dispatch::Continue => offsets.push(player.offset()),
                Dispatch::Blocked => break,
                Dispatch::Quit => panic!("playback never quits on its own"),
            }
        }

        assert_eq!(offsets, [1, 0]);
        assert_eq!(player.offset(), 0);
        assert_eq!(player.mode(), Mode::Idle);
    }

    #[test]
    fn test_rewind_walks_back_to_oldest_then_goes_idle() {
        let mut player = make_player();
        player.refresh().unwrap();
        player.apply(Command::Rewind);

        let mut offsets = Vec::new();
        loop {
            player.refresh().unwrap();
            let command = player.auto_command().expect("rewinding synthesizes input");
            match player.apply(command) {
                Dispatch::Continue => offsets.push(player.offset()),
                Dispatch::Blocked => break,
                Dispatch::Quit => panic!("playback never quits on its own"),
            }
        }

        assert_eq!(offsets, [1, 2]);
        assert_eq!(player.offset(), 2);
        assert_eq!(player.mode(), Mode::Idle);
    }

    #[test]
    fn test_delay_only_when_auto_advancing_over_added_rows() {
        let mut player = make_player();
        player.refresh().unwrap();
        assert!(!player.added().is_empty());
        assert!(!player.wants_delay());

        player.apply(Command::Play);
        player.refresh().unwrap();
        assert!(player.wants_delay());

        // Oldest revision has no added rows: no throttle even while auto
        player.offset = 2;
        player.mode = Mode::Rewinding;
        player.refresh().unwrap();
        assert!(!player.wants_delay());
    }

    #[test]
    fn test_quit_passes_through() {
        let mut player = make_player();
        player.refresh().unwrap();
        assert_eq!(player.apply(Command::Quit), Dispatch::Quit);
    }

    #[test]
    fn test_forward_stops_where_file_vanishes() {
        // File does not exist at HEAD~0 (deleted in the newest commit):
        // playing forward from HEAD~1 must block instead of stepping
        // onto the revision without the file.
        let mut player = Player::new(FakeHistory::new(&[&[], &["a"], &["a"]]));
        player.offset = 1;
        player.mode = Mode::Playing;
        player.refresh().unwrap();

        assert_eq!(player.apply(Command::StepForward), Dispatch::Blocked);
        assert_eq!(player.offset(), 1);
        assert_eq!(player.mode(), Mode::Idle);
    }
}
