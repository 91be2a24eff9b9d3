//! Header panel UI rendering
//!
//! Handles the navigation bar: screen title, back/forward navigation and the
//! new window button.

use eframe::egui;
use egui::RichText;
use crate::state::{NavigationState, Screen};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "New Window"
    NewWindowRequested,
}

/// Renders the navigation bar
///
/// Navigation between screens is handled in place on `navigation`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `navigation` - Mutable reference to the window's navigation state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, navigation: &mut NavigationState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        match navigation.screen() {
            Screen::Home => {
                if ui.button("Another ▶").clicked() {
                    navigation.show_another();
                }
            }
            Screen::Another => {
                if ui.button("◀ Back").clicked() {
                    navigation.go_back();
                }
            }
        }

        ui.separator();
        ui.label(RichText::new(navigation.screen().title()).heading().strong());

        // Push window controls to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🗗 New Window").clicked() {
                interaction = Some(HeaderInteraction::NewWindowRequested);
            }
        });
    });

    interaction
}
