//! Application configuration
//!
//! Configuration loaded from .go-resources.toml file. Every field is
//! optional; the resource list itself is compiled in and not configurable.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .go-resources.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Capture mouse clicks and wheel events while the menu is open
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,

    /// Log level written to the log file ("error" .. "trace").
    /// `RUST_LOG` takes precedence. No log file is written when both are unset.
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_mouse_capture() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mouse_capture: default_mouse_capture(),
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// Runs before the logger exists, so a parse failure comes back as
    /// warning text for the caller to log.
    pub fn load() -> (Self, Option<String>) {
        Self::from_content(crate::load_config_file())
    }

    /// Resolve optional config file content, defaults when absent or invalid
    fn from_content(content: Option<String>) -> (Self, Option<String>) {
        match content.as_deref().map(Self::parse) {
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (
                Self::default(),
                Some(format!("Failed to parse config file: {}", e)),
            ),
            None => (Self::default(), None),
        }
    }

    /// Parse config content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
