//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the dark mode demo:
//! - Header panel (screen title, navigation, new window button)
//! - Home screen (dark mode status)
//! - Another screen (static content)
//! - Picker (appearance options list)
//! - Status bar (active appearance)
//! - Panel manager (per-window layout)

pub mod header;
pub mod home;
pub mod another;
pub mod picker;
pub mod status_bar;
pub mod panel_manager;
