//! Multi-column page layout
//!
//! Long files page sideways instead of scrolling: rows fill the first
//! column top to bottom, then wrap into the next fixed-width column.
//! The whole file is visible in one static frame, at the cost of
//! dropping any column that would not fully fit on screen.

/// Screen cell where a row starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub x: u16,
    pub y: u16,
}

/// Compute where row `row` lands on a `width` x `height` grid split into
/// `col_width`-wide columns, with the bottom row reserved for the status
/// line.
///
/// Returns `None` when the row's column does not completely fit to the
/// left of `width - 1`; a partially visible column is worse than an
/// omitted one, so such rows are dropped rather than truncated.
pub fn place(row: usize, height: u16, width: u16, col_width: u16) -> Option<Slot> {
    let rows_per_column = height.saturating_sub(1) as usize;
    if rows_per_column == 0 || col_width == 0 {
        return None;
    }

    let column = row / rows_per_column;
    let y = (row % rows_per_column) as u16;
    let x = column * col_width as usize;
    if x + col_width as usize >= width as usize {
        return None;
    }

    Some(Slot { x: x as u16, y })
}
