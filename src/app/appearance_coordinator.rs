//! Appearance management and window wiring.
//!
//! Builds the appearance controller at startup, keeps its surface registry in
//! step with the windows that are open, and answers the "is it dark?" query.

use rdarkmode::{
    AppearanceChoice, AppearanceController, FileStore, PreferenceConfig, ViewportRegistry,
};

pub type Controller = AppearanceController<ViewportRegistry>;

/// Coordinates the appearance controller with the egui windows.
pub struct AppearanceCoordinator;

impl AppearanceCoordinator {
    /// Creates and initializes the controller during application startup.
    ///
    /// The saved choice is applied to the root window before its first frame.
    pub fn create_controller(ctx: &egui::Context, config: &PreferenceConfig) -> Controller {
        log::info!(
            "Appearance preference stored in {} under '{}' ({:?} codes)",
            config.path.display(),
            config.key,
            config.format
        );

        let store = FileStore::from_config(config);
        let registry = ViewportRegistry::new(ctx.clone());
        let mut controller = AppearanceController::new(Box::new(store), registry).with_format(config.format);
        controller.initialize();

        let repaint_ctx = ctx.clone();
        controller.subscribe(move |choice| {
            log::debug!("Re-rendering for appearance {}", choice);
            repaint_ctx.request_repaint();
        });

        controller
    }

    /// Registers a newly opened window and brings it to the current appearance.
    pub fn attach_window(controller: &mut Controller, viewport: egui::ViewportId) {
        controller.registry_mut().attach(viewport);
        controller.apply_current();
    }

    /// Forgets a closed window.
    pub fn detach_window(controller: &mut Controller, viewport: egui::ViewportId) {
        if !controller.registry_mut().detach(viewport) {
            log::debug!("Viewport {:?} was not attached", viewport);
        }
    }

    /// Whether the windows currently render dark.
    ///
    /// When following the system, uses the OS theme if egui knows it and the
    /// fallback theme otherwise.
    pub fn is_dark(ctx: &egui::Context, choice: AppearanceChoice) -> bool {
        let system_theme = ctx
            .system_theme()
            .unwrap_or_else(|| ctx.options(|o| o.fallback_theme));
        choice.resolves_dark(system_theme == egui::Theme::Dark)
    }
}
