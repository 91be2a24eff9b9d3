//! Home screen UI rendering
//!
//! Shows whether the windows are dark and whether they follow the system
//! setting, with a button that presents the appearance picker.

use eframe::egui;
use egui::RichText;

/// Result of user interaction with the home screen
pub enum HomeInteraction {
    /// User clicked "Change Appearance"
    ChangeAppearanceRequested,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Renders the home screen
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `is_dark` - Whether the window currently renders dark
/// * `follows_system` - Whether the current choice defers to the OS
pub fn render_home(ui: &mut egui::Ui, is_dark: bool, follows_system: bool) -> Option<HomeInteraction> {
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);

        ui.label(RichText::new("Is it Dark?").heading());
        ui.label(RichText::new(yes_no(is_dark)).size(34.0).strong());

        ui.add_space(12.0);

        ui.label(RichText::new("Follow System Settings?").heading());
        ui.label(RichText::new(yes_no(follows_system)).size(34.0).strong());

        ui.add_space(24.0);

        if ui.button(RichText::new("Change Appearance").strong()).clicked() {
            interaction = Some(HomeInteraction::ChangeAppearanceRequested);
        }
    });

    interaction
}
