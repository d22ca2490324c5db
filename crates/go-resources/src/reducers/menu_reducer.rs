//! Menu Reducer
//!
//! Cursor movement and status message updates.

use crate::actions::{Action, MenuAction, NavigationAction};
use crate::state::{MenuState, StatusMessage};

/// Reduce menu state for a catalog of `count` entries
pub fn reduce(mut state: MenuState, action: &Action, count: usize) -> MenuState {
    match action {
        Action::Navigate(NavigationAction::Previous) => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        Action::Navigate(NavigationAction::Next) => {
            state.cursor = (state.cursor + 1).min(count.saturating_sub(1));
        }
        Action::Menu(MenuAction::SelectEntry(index)) => {
            if *index < count {
                state.cursor = *index;
            } else {
                log::warn!("Ignoring selection of entry {} (only {})", index, count);
            }
        }
        Action::Menu(MenuAction::Opened { name }) => {
            state.last_message = Some(StatusMessage::success(format!("Opened: {}", name)));
        }
        Action::Menu(MenuAction::OpenFailed { reason }) => {
            state.last_message = Some(StatusMessage::error(format!("Error opening: {}", reason)));
        }
        _ => {}
    }
    state
}
