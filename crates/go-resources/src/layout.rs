//! Menu geometry
//!
//! Shared by the renderer and the mouse hit-testing so both agree on where
//! each entry is drawn.

/// Lines above the first entry: title, key hints, blank line
pub const HEADER_HEIGHT: u16 = 3;

/// Lines per entry: name, description, blank line
pub const ROW_PITCH: u16 = 3;

/// Map a terminal row to the index of the entry drawn there
///
/// Returns `None` for rows in the header or below the last entry.
pub fn entry_at_row(row: u16, count: usize) -> Option<usize> {
    let offset = row.checked_sub(HEADER_HEIGHT)?;
    let index = usize::from(offset / ROW_PITCH);
    (index < count).then_some(index)
}
