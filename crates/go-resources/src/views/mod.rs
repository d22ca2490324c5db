use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod menu_view;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    menu_view::render(state, area, f);
}
