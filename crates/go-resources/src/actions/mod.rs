//! Actions module
//!
//! Actions are organized by:
//! - Raw input that middleware translates into semantic actions
//! - Generic navigation actions
//! - Global actions that affect the entire application
//! - Menu actions targeted at the resource list

pub mod global;
pub mod menu;
pub mod navigation;

pub use global::GlobalAction;
pub use menu::MenuAction;
pub use navigation::NavigationAction;

use crate::input::InputEvent;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw input from the terminal (before translation)
    Input(InputEvent),
    /// Generic navigation action
    Navigate(NavigationAction),
    /// Global application actions
    Global(GlobalAction),
    /// Actions on the resource list
    Menu(MenuAction),
}
