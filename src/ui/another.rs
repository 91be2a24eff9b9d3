//! Static content screen.

use eframe::egui;

pub fn render_another(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label("Text123");
    });
}
