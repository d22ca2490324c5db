//! BrowserMiddleware - opens the selected resource
//!
//! Handles `Menu(Select)` (entry under the cursor) and `Menu(SelectEntry)`
//! (clicked entry) by handing the URL to the launcher, then reports the
//! outcome as `Menu(Opened)` or `Menu(OpenFailed)`. Launch failures are never
//! retried and never stop the application.

use browser_launcher::Launcher;

use crate::actions::{Action, MenuAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct BrowserMiddleware {
    launcher: Box<dyn Launcher>,
}

impl BrowserMiddleware {
    pub fn new(launcher: Box<dyn Launcher>) -> Self {
        Self { launcher }
    }

    fn open_entry(&self, index: usize, state: &AppState, dispatcher: &Dispatcher) {
        let outcome = match state.catalog.get(index) {
            Ok(resource) => match self.launcher.open(resource.url) {
                Ok(()) => {
                    log::info!("Opened {} ({})", resource.name, resource.url);
                    MenuAction::Opened {
                        name: resource.name.to_string(),
                    }
                }
                Err(e) => {
                    log::error!("Failed to open {}: {}", resource.url, e);
                    MenuAction::OpenFailed {
                        reason: e.to_string(),
                    }
                }
            },
            Err(e) => {
                log::error!("Cannot open entry: {}", e);
                MenuAction::OpenFailed {
                    reason: e.to_string(),
                }
            }
        };
        dispatcher.dispatch(Action::Menu(outcome));
    }
}

impl Middleware for BrowserMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Menu(MenuAction::Select) => {
                self.open_entry(state.menu.cursor, state, dispatcher);
            }
            Action::Menu(MenuAction::SelectEntry(index)) => {
                self.open_entry(*index, state, dispatcher);
            }
            _ => {}
        }
        true // the reducer still moves the cursor for SelectEntry
    }
}
