//! Menu actions
//!
//! Selecting an entry and the outcome of opening it.

/// Actions on the resource list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Open the entry under the cursor
    Select,
    /// Move the cursor to an entry and open it (mouse click)
    SelectEntry(usize),
    /// The browser was started for the named resource
    Opened { name: String },
    /// Opening failed; `reason` is shown to the user
    OpenFailed { reason: String },
}
