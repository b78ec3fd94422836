//! UI rendering for the TUI

use crate::app::App;
use crate::layout::place;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use vcr_core::RevisionSource;

/// Main drawing function
pub fn draw<S: RevisionSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    let text_style = Style::default().fg(app.theme.text);
    let added_style = Style::default().fg(app.theme.added);

    for (row, line) in app.player.lines().iter().enumerate() {
        let Some(slot) = place(row, area.height, area.width, app.col_width) else {
            // Column does not fit on this screen; the row is dropped,
            // not truncated
            continue;
        };
        let style = if app.player.added().contains(&row) {
            added_style
        } else {
            text_style
        };
        buf.set_stringn(slot.x, slot.y, line, app.col_width as usize, style);
    }

    draw_status(buf, area, app);
}

/// Revision label on the reserved bottom row, inverted so it reads as
/// chrome rather than content
fn draw_status<S: RevisionSource>(buf: &mut Buffer, area: Rect, app: &App<S>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let style = if app.boundary_alert() {
        Style::default()
            .fg(app.theme.warning)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let max_width = area.width.saturating_sub(1) as usize;
    buf.set_stringn(0, area.height - 1, app.player.label(), max_width, style);
}
