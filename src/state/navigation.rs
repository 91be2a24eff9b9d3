//! Per-window navigation state.
//!
//! Tracks which screen a window shows and whether the appearance picker sheet
//! is presented on top of it.

use serde::{Deserialize, Serialize};

/// Screens reachable from a window's navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// "Dark Mode Status" overview
    #[default]
    Home,
    /// Static content screen
    Another,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Dark Mode Status",
            Screen::Another => "Another",
        }
    }
}

/// Navigation state of one window.
///
/// Responsibilities:
/// - Tracking the visible screen
/// - Tracking whether the picker sheet is open
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    screen: Screen,
    picker_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    // ===== Mutations =====

    /// Pushes the static screen.
    pub fn show_another(&mut self) {
        self.screen = Screen::Another;
    }

    /// Returns to the home screen.
    pub fn go_back(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Mutable flag for `egui::Window::open`.
    pub fn picker_open_mut(&mut self) -> &mut bool {
        &mut self.picker_open
    }
}
