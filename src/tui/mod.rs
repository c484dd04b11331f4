//! Terminal dashboard
//!
//! - `dashboard` - the full-screen component wiring store, refresh loop and keys
//! - `model` - view-only state reducer and key mapping, testable without rendering
//! - `components` - header, metric cards, tab bar, ticket list, client panel, footer

pub mod components;
pub mod dashboard;
pub mod model;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps};
pub use model::{UiAction, UiContext, UiEffect, UiState, key_to_action, reduce_ui_state};
pub use theme::Theme;
