//! Panel orchestration and layout management.
//!
//! Lays out one window: navigation header, the current screen, the picker
//! sheet and the status bar. Every window (root or extra) is rendered through
//! here, with panel ids salted by the viewport so windows do not share state.

use eframe::egui;
use rdarkmode::AppearanceChoice;

use crate::state::{NavigationState, Screen};
use crate::ui::{another, header, home, picker, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// A row of the appearance picker was clicked
    AppearanceSelected(AppearanceChoice),
    /// User asked for another native window
    NewWindowRequested,
}

/// What the panels need to know about the appearance, read once per frame.
#[derive(Debug, Clone, Copy)]
pub struct AppearanceView {
    pub choice: AppearanceChoice,
    pub is_dark: bool,
}

/// Manages the layout and rendering of a window's panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels of the window whose viewport `ctx` is currently drawing.
    pub fn render_window(
        ctx: &egui::Context,
        navigation: &mut NavigationState,
        appearance: AppearanceView,
        status: &str,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let viewport = ctx.viewport_id();

        // Navigation bar at the top
        egui::TopBottomPanel::top(egui::Id::new("header").with(viewport)).show(ctx, |ui| {
            if let Some(header::HeaderInteraction::NewWindowRequested) = header::render_header(ui, navigation) {
                interaction = Some(PanelInteraction::NewWindowRequested);
            }
        });

        // Status bar at the very bottom
        egui::TopBottomPanel::bottom(egui::Id::new("status_panel").with(viewport)).show(ctx, |ui| {
            status_bar::render_status_bar(ui, appearance.choice, status);
        });

        egui::CentralPanel::default().show(ctx, |ui| match navigation.screen() {
            Screen::Home => {
                if let Some(home::HomeInteraction::ChangeAppearanceRequested) =
                    home::render_home(ui, appearance.is_dark, appearance.choice.follows_system())
                {
                    navigation.open_picker();
                }
            }
            Screen::Another => another::render_another(ui),
        });

        // Picker sheet over the current screen
        let mut selected = None;
        let mut done = false;
        egui::Window::new("Appearance Options")
            .id(egui::Id::new("appearance_picker").with(viewport))
            .open(navigation.picker_open_mut())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                selected = picker::render_picker(ui, appearance.choice);
                ui.vertical_centered(|ui| {
                    if ui.button("Done").clicked() {
                        done = true;
                    }
                });
            });

        if done {
            navigation.close_picker();
        }
        if let Some(choice) = selected {
            interaction = Some(PanelInteraction::AppearanceSelected(choice));
        }

        interaction
    }
}
