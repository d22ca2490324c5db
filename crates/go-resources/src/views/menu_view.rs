//! Menu view
//!
//! Draws the resource list produced by the menu view model.

use crate::state::AppState;
use crate::view_models::MenuViewModel;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Render the menu
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = MenuViewModel::from_state(state);
    f.render_widget(Paragraph::new(vm.to_text()), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| render(state, f.area(), f))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_entries_drawn_at_expected_rows() {
        let buffer = draw(&AppState::default());
        assert_eq!(row(&buffer, 3), "  ► Go.dev");
        assert_eq!(row(&buffer, 9), "    Effective Go");
        assert_eq!(row(&buffer, 21), "    Exercism");
        assert_eq!(row(&buffer, 24), "");
    }

    #[test]
    fn test_status_drawn_below_entries() {
        let mut state = AppState::default();
        state.menu.last_message = Some(StatusMessage::success("Opened: Go.dev"));
        let buffer = draw(&state);
        assert_eq!(row(&buffer, 24), "");
        assert_eq!(row(&buffer, 25), "Opened: Go.dev");
    }

    #[test]
    fn test_same_state_same_buffer() {
        let mut state = AppState::default();
        state.menu.cursor = 5;
        assert_eq!(draw(&state), draw(&state));
    }
}
