use go_resources_theme::Theme;

use crate::catalog::Catalog;
use crate::keybindings::{default_keymap, Keymap};

/// Kind of status message (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The browser was started
    Success,
    /// Opening failed
    Error,
}

/// Outcome of the most recent open attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Menu state - cursor position and last status message
///
/// Invariant: `cursor < catalog.count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub cursor: usize,
    pub last_message: Option<StatusMessage>,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cleared by the quit action; the event loop stops once false
    pub running: bool,
    pub menu: MenuState,
    pub catalog: Catalog,
    pub theme: Theme,
    pub keymap: Keymap,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::go_resources(), Theme::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            running: true,
            menu: MenuState::default(),
            catalog,
            theme,
            keymap: default_keymap(),
        }
    }
}
