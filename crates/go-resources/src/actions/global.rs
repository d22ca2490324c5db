//! Global actions - not tied to any specific part of the menu

/// Global actions that affect the entire application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
}
