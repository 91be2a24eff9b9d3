//! Application-level modules for the dark mode demo.
//!
//! This module contains the appearance coordinator and centralized state management.

mod app_state;
mod appearance_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use appearance_coordinator::{AppearanceCoordinator, Controller};
pub use settings_coordinator::SettingsCoordinator;
