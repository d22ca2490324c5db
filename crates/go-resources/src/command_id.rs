//! Command identifiers
//!
//! The semantic commands a key binding can trigger.

use serde::{Deserialize, Serialize};

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `NavigatePrevious` -> `"navigate_previous"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    /// Quit the application
    GlobalQuit,
    /// Move the cursor up one entry
    NavigatePrevious,
    /// Move the cursor down one entry
    NavigateNext,
    /// Open the entry under the cursor
    Confirm,
}

impl CommandId {
    /// Short label shown in the help line
    pub fn label(&self) -> &'static str {
        match self {
            Self::GlobalQuit => "quit",
            Self::NavigatePrevious => "up",
            Self::NavigateNext => "down",
            Self::Confirm => "open",
        }
    }
}
