//! Helpers shared by the store-level tests

use std::sync::{Arc, Mutex};

use browser_launcher::{LaunchError, Launcher};
use go_resources_theme::Theme;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::Catalog;
use crate::input::InputEvent;
use crate::state::AppState;
use crate::store::Store;

pub fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> InputEvent {
    InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn click(row: u16) -> InputEvent {
    InputEvent::MouseClick { column: 6, row }
}

/// Launcher that records every URL instead of starting a browser
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    opened: Arc<Mutex<Vec<String>>>,
    fail_with: Option<&'static str>,
}

impl RecordingLauncher {
    /// Store with the full middleware chain and a launcher that always succeeds
    pub fn store() -> (Store, Self) {
        Self::default().into_store()
    }

    /// Store with the full middleware chain and a launcher that always fails
    pub fn failing_store(message: &'static str) -> (Store, Self) {
        Self {
            fail_with: Some(message),
            ..Self::default()
        }
        .into_store()
    }

    fn into_store(self) -> (Store, Self) {
        let state = AppState::new(Catalog::go_resources(), Theme::default());
        let store = crate::create_store(state, Box::new(self.clone()));
        (store, self)
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        self.opened.lock().unwrap().push(url.to_string());
        match self.fail_with {
            Some(message) => Err(LaunchError::SpawnFailed {
                program: "xdg-open".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, message),
            }),
            None => Ok(()),
        }
    }
}
