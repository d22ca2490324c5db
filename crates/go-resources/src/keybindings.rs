//! Keybinding system
//!
//! Maps keyboard input to commands.
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `KeyPattern`: Textual representation of keys (e.g., "ctrl+c", "space")
//! - `Keymap`: Collection of bindings with matching logic
//!
//! Key patterns are textual and serializable.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+c", "enter", "q"
    pub keys: String,
    /// Display hint for the UI - e.g., "↑", "enter"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "k", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Special keys: "enter", "esc", "space", "up", "down", ...
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    // Single characters keep their case; uppercase arrives with SHIFT
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;

    Some(KeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings
    ///
    /// Bindings whose pattern does not parse are dropped with a warning.
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed: Vec<_> = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparsable key binding {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Find the command bound to a key event, if any
    pub fn match_key(&self, key: &KeyEvent) -> Option<CommandId> {
        self.bindings
            .iter()
            .find(|(_, pattern)| key.code == pattern.code && key.modifiers == pattern.modifiers)
            .map(|(binding, _)| binding.command)
    }

    /// Get a compact hint string for a command (e.g., "↓/j" for NavigateNext)
    /// Deduplicates hints and joins with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in &self.bindings {
            if binding.command == command && !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(binding.hint.as_str());
            }
        }

        if unique_hints.is_empty() {
            return None;
        }

        Some(unique_hints.join("/"))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        default_keymap()
    }
}

/// Bindings of the menu
pub fn default_keymap() -> Keymap {
    use CommandId::*;
    Keymap::new(vec![
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("enter", "enter", Confirm),
        KeyBinding::new("space", "space", Confirm),
        KeyBinding::new("q", "q", GlobalQuit),
        KeyBinding::new("esc", "esc", GlobalQuit),
        KeyBinding::new("ctrl+c", "ctrl+c", GlobalQuit),
    ])
}
