//! KeyboardMiddleware - translates key presses into semantic actions
//!
//! Keys are looked up in the keymap held by the state. Unbound keys are
//! swallowed so they never reach the reducer.

use crate::actions::{Action, GlobalAction, MenuAction, NavigationAction};
use crate::command_id::CommandId;
use crate::dispatcher::Dispatcher;
use crate::input::InputEvent;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Input(InputEvent::Key(key)) = action else {
            return true;
        };

        match state.keymap.match_key(key) {
            Some(command) => {
                log::debug!("Key {:?} -> {:?}", key.code, command);
                dispatcher.dispatch(command_action(command));
            }
            None => log::trace!("Unbound key {:?}", key),
        }

        false
    }
}

fn command_action(command: CommandId) -> Action {
    match command {
        CommandId::GlobalQuit => Action::Global(GlobalAction::Quit),
        CommandId::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
        CommandId::NavigateNext => Action::Navigate(NavigationAction::Next),
        CommandId::Confirm => Action::Menu(MenuAction::Select),
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::Action;
    use crate::testing::{ctrl, key, RecordingLauncher};
    use ratatui::crossterm::event::KeyCode;

    #[test]
    fn test_quit_keys_stop_from_any_state() {
        for quit in [key(KeyCode::Char('q')), key(KeyCode::Esc), ctrl('c')] {
            for start in 0..7 {
                let (mut store, _launcher) = RecordingLauncher::store();
                for _ in 0..start {
                    store.dispatch(Action::Input(key(KeyCode::Down)));
                }
                store.dispatch(Action::Input(quit));
                assert!(!store.state().running, "{:?} from {}", quit, start);
            }
        }
    }

    #[test]
    fn test_down_and_up_keys_move_cursor() {
        let (mut store, _launcher) = RecordingLauncher::store();

        store.dispatch(Action::Input(key(KeyCode::Char('j'))));
        store.dispatch(Action::Input(key(KeyCode::Down)));
        assert_eq!(store.state().menu.cursor, 2);

        store.dispatch(Action::Input(key(KeyCode::Char('k'))));
        assert_eq!(store.state().menu.cursor, 1);

        store.dispatch(Action::Input(key(KeyCode::Up)));
        store.dispatch(Action::Input(key(KeyCode::Up)));
        assert_eq!(store.state().menu.cursor, 0);
    }

    #[test]
    fn test_seven_downs_clamp_at_last_entry() {
        let (mut store, _launcher) = RecordingLauncher::store();
        for _ in 0..6 {
            store.dispatch(Action::Input(key(KeyCode::Down)));
        }
        assert_eq!(store.state().menu.cursor, 6);

        store.dispatch(Action::Input(key(KeyCode::Down)));
        assert_eq!(store.state().menu.cursor, 6);
    }

    #[test]
    fn test_unbound_key_changes_nothing() {
        let (mut store, launcher) = RecordingLauncher::store();
        store.dispatch(Action::Input(key(KeyCode::Char('x'))));

        assert!(store.state().running);
        assert_eq!(store.state().menu.cursor, 0);
        assert_eq!(store.state().menu.last_message, None);
        assert!(launcher.opened().is_empty());
    }
}
