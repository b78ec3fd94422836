//! Application state and input handling

use crate::config::ResolvedTheme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use vcr_core::{Command, Player, RevisionSource};

mod playback;

/// How long the status line keeps the boundary alert style
pub(crate) const BOUNDARY_HINT_MS: u64 = 500;

/// The main application state
pub struct App<S: RevisionSource> {
    /// Playback engine
    pub player: Player<S>,
    /// Resolved theme colors
    pub theme: ResolvedTheme,
    /// Fixed width of each rendered text column
    pub col_width: u16,
    /// Pause between auto-advance steps that added lines
    pub step_delay: Duration,
    /// Boundary alert shown in the status line until this instant
    boundary_hint: Option<Instant>,
    /// Terminal bell queued by a blocked move
    bell_pending: bool,
}

impl<S: RevisionSource> App<S> {
    pub fn new(player: Player<S>, theme: ResolvedTheme, col_width: u16, speed_ms: u64) -> Self {
        Self {
            player,
            theme,
            col_width,
            step_delay: Duration::from_millis(speed_ms),
            boundary_hint: None,
            bell_pending: false,
        }
    }

    /// Map a key event to a playback command. The bindings are fixed;
    /// every other key is ignored.
    pub fn command_for_key(&self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('p') => Some(Command::Play),
            KeyCode::Char('r') => Some(Command::Rewind),
            KeyCode::Char('f') | KeyCode::Right => Some(Command::StepForward),
            KeyCode::Char('b') | KeyCode::Left => Some(Command::StepBackward),
            _ => None,
        }
    }
}
