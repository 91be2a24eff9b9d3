//! Status bar UI rendering
//!
//! Handles the bottom status bar showing the active appearance.

use eframe::egui;
use egui::RichText;
use rdarkmode::AppearanceChoice;

/// Renders the status bar at the bottom of a window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `choice` - The controller's current choice
/// * `details` - Extra status text (applied directive, window count)
pub fn render_status_bar(ui: &mut egui::Ui, choice: AppearanceChoice, details: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Appearance: {}", choice)).strong());
        ui.label(RichText::new("|").strong());
        ui.label(details);
    });
}
