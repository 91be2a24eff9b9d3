//! State management modules for the dark mode demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Navigation state (visible screen, picker sheet)
//! - Windows state (extra native windows)
//!
//! The appearance choice itself is owned by the appearance controller.

mod navigation;
mod windows;

pub use navigation::{NavigationState, Screen};
pub use windows::WindowsState;
