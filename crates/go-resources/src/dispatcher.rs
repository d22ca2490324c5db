//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Actions are queued and processed by the store once the
//! current action has been reduced, in the order they were dispatched.
//!
//! This enables patterns like:
//! - a key press translated into `Navigate(Next)`
//! - `Menu(Select)` followed by `Menu(Opened { .. })` once the browser started

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
