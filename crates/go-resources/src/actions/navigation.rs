//! Navigation actions
//!
//! Produced by both the keyboard (arrows, j/k) and the mouse wheel.

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow, wheel down)
    Next,
    /// Navigate to previous item (k, up arrow, wheel up)
    Previous,
}
