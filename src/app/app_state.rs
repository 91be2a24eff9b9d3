//! Centralized application state for the dark mode demo.
//!
//! Composes the focused state components. The appearance choice is not part of
//! it: the appearance controller is the single source of truth for that.

use crate::state::{NavigationState, WindowsState};

/// Main application state composed of focused state components.
#[derive(Debug, Default)]
pub struct AppState {
    /// Navigation of the root window
    pub navigation: NavigationState,

    /// Extra windows opened by the user
    pub windows: WindowsState,
}

impl AppState {
    /// Creates a new AppState with the root window's navigation restored from storage.
    pub fn with_navigation(navigation: NavigationState) -> Self {
        Self {
            navigation,
            windows: WindowsState::new(),
        }
    }
}
