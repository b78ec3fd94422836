use super::{App, BOUNDARY_HINT_MS};
use std::time::{Duration, Instant};
use vcr_core::RevisionSource;

impl<S: RevisionSource> App<S> {
    /// A move ran into the end of the file's history: queue the bell and
    /// start the short-lived status-line alert.
    pub fn note_blocked(&mut self) {
        self.boundary_hint = Some(Instant::now() + Duration::from_millis(BOUNDARY_HINT_MS));
        self.bell_pending = true;
    }

    /// True while the status line should render in the alert style
    pub fn boundary_alert(&self) -> bool {
        self.boundary_hint.map_or(false, |until| Instant::now() < until)
    }

    /// Take the queued terminal bell, if any
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}
