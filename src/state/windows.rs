//! Additional native windows.
//!
//! The root window is always open; this tracks the extra windows the user
//! opened, each shown as an immediate egui viewport with its own navigation.

use egui::ViewportId;

use super::NavigationState;

/// One extra window.
#[derive(Debug, Clone)]
pub struct ExtraWindow {
    /// Counts from 1 in opening order; the root window is not counted
    pub number: u32,
    pub viewport: ViewportId,
    pub navigation: NavigationState,
}

impl ExtraWindow {
    pub fn title(&self) -> String {
        format!("Dark Mode Status #{}", self.number + 1)
    }
}

/// State of the extra windows.
#[derive(Debug, Clone, Default)]
pub struct WindowsState {
    windows: Vec<ExtraWindow>,
    opened_total: u32,
}

impl WindowsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new window and returns its viewport id.
    pub fn open(&mut self) -> ViewportId {
        self.opened_total += 1;
        let number = self.opened_total;
        let viewport = ViewportId::from_hash_of(("extra_window", number));
        self.windows.push(ExtraWindow {
            number,
            viewport,
            navigation: NavigationState::new(),
        });
        viewport
    }

    /// Removes a closed window. Returns false if it was not open.
    pub fn close(&mut self, viewport: ViewportId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.viewport != viewport);
        self.windows.len() != before
    }

    pub fn windows_mut(&mut self) -> &mut [ExtraWindow] {
        &mut self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut windows = WindowsState::new();
        let first = windows.open();
        let second = windows.open();
        assert_ne!(first, second);
        assert_eq!(windows.len(), 2);

        assert!(windows.close(first));
        assert!(!windows.close(first));
        assert_eq!(windows.len(), 1);

        // Numbers keep increasing after a close
        let third = windows.open();
        assert_ne!(third, first);
        assert_eq!(windows.windows_mut()[1].number, 3);
    }
}
