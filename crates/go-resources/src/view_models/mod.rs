//! View models
//!
//! Pre-computed presentation data derived from `AppState`.

pub mod menu_view_model;

pub use menu_view_model::MenuViewModel;
