//! Appearance picker UI rendering
//!
//! Lists the three appearance choices in fixed order with a checkmark next to
//! the current one.

use eframe::egui;
use rdarkmode::AppearanceChoice;

/// Renders the appearance list
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `current` - The controller's current choice
///
/// # Returns
/// * `Option<AppearanceChoice>` - The row the user clicked, if any
pub fn render_picker(ui: &mut egui::Ui, current: AppearanceChoice) -> Option<AppearanceChoice> {
    let mut clicked = None;

    for choice in AppearanceChoice::ALL {
        let row_width = ui.available_width();
        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [(row_width - 24.0).max(0.0), 24.0],
                egui::Button::new(choice.label()).frame(false),
            );
            if choice == current {
                ui.label(egui::RichText::new("✔").color(ui.visuals().hyperlink_color));
            }
            if response.clicked() {
                clicked = Some(choice);
            }
        });
        ui.separator();
    }

    clicked
}
