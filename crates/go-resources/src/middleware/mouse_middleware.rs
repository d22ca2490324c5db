//! MouseMiddleware - translates clicks and wheel steps into semantic actions
//!
//! The wheel behaves like the arrow keys. A left click on an entry moves the
//! cursor there and opens it; clicks anywhere else are ignored.

use crate::actions::{Action, MenuAction, NavigationAction};
use crate::dispatcher::Dispatcher;
use crate::input::{InputEvent, WheelDirection};
use crate::layout::entry_at_row;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct MouseMiddleware;

impl MouseMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for MouseMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Input(InputEvent::MouseWheel(direction)) => {
                let nav = match direction {
                    WheelDirection::Up => NavigationAction::Previous,
                    WheelDirection::Down => NavigationAction::Next,
                };
                dispatcher.dispatch(Action::Navigate(nav));
                false
            }
            Action::Input(InputEvent::MouseClick { column, row }) => {
                match entry_at_row(*row, state.catalog.count()) {
                    Some(index) => dispatcher.dispatch(Action::Menu(MenuAction::SelectEntry(index))),
                    None => log::trace!("Click at ({}, {}) outside entries", column, row),
                }
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::Action;
    use crate::input::{InputEvent, WheelDirection};
    use crate::testing::{click, key, RecordingLauncher};
    use ratatui::crossterm::event::KeyCode;

    #[test]
    fn test_wheel_moves_cursor_like_arrows() {
        let (mut store, _launcher) = RecordingLauncher::store();

        store.dispatch(Action::Input(InputEvent::MouseWheel(WheelDirection::Up)));
        assert_eq!(store.state().menu.cursor, 0);

        store.dispatch(Action::Input(InputEvent::MouseWheel(WheelDirection::Down)));
        store.dispatch(Action::Input(InputEvent::MouseWheel(WheelDirection::Down)));
        assert_eq!(store.state().menu.cursor, 2);

        store.dispatch(Action::Input(InputEvent::MouseWheel(WheelDirection::Up)));
        assert_eq!(store.state().menu.cursor, 1);
    }

    #[test]
    fn test_click_on_third_entry_moves_cursor_and_opens() {
        let (mut store, launcher) = RecordingLauncher::store();

        // Description line of entry 2
        store.dispatch(Action::Input(click(10)));

        assert_eq!(store.state().menu.cursor, 2);
        assert_eq!(launcher.opened(), vec!["https://go.dev/doc/effective_go"]);
        assert_eq!(
            store.state().menu.last_message.as_ref().map(|m| m.text.as_str()),
            Some("Opened: Effective Go")
        );
    }

    #[test]
    fn test_click_matches_move_then_select() {
        let (mut clicked, _) = RecordingLauncher::store();
        clicked.dispatch(Action::Input(click(9)));

        let (mut keyed, _) = RecordingLauncher::store();
        for code in [KeyCode::Down, KeyCode::Down, KeyCode::Enter] {
            keyed.dispatch(Action::Input(key(code)));
        }

        assert_eq!(clicked.state().menu, keyed.state().menu);
    }

    #[test]
    fn test_click_below_last_entry_changes_nothing() {
        let (mut store, launcher) = RecordingLauncher::store();
        let before = store.state().menu.clone();

        store.dispatch(Action::Input(click(24)));
        store.dispatch(Action::Input(click(40)));

        assert_eq!(store.state().menu, before);
        assert!(launcher.opened().is_empty());
    }

    #[test]
    fn test_click_on_header_changes_nothing() {
        let (mut store, launcher) = RecordingLauncher::store();
        store.dispatch(Action::Input(click(0)));
        store.dispatch(Action::Input(click(2)));

        assert_eq!(store.state().menu.cursor, 0);
        assert!(launcher.opened().is_empty());
    }
}
