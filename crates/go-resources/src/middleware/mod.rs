use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod browser_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod mouse_middleware;

pub use browser_middleware::BrowserMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use mouse_middleware::MouseMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
