//! Dark Mode demo GUI application
//!
//! A small egui application that lets the user pick an appearance (follow the
//! system, force light, force dark) and remembers the choice across restarts.
//! The viewer features:
//! - A status screen answering "Is it Dark?" and "Follow System Settings?"
//! - An appearance picker sheet with the current choice checked
//! - Any number of extra native windows, all kept on the same appearance
//! - A static secondary screen reachable from the navigation bar
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination with the appearance controller
//! - `state/` - Navigation and window state
//! - `ui/` - Panel rendering and interaction

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{bail, Context, Result};
use eframe::egui;
use rdarkmode::{CodeFormat, PreferenceConfig};

mod app;
mod state;
mod ui;

use app::{AppState, AppearanceCoordinator, Controller, SettingsCoordinator};
use ui::panel_manager::{AppearanceView, PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the demo GUI.
fn main() -> eframe::Result {
    env_logger::init();

    let config = match parse_args(PreferenceConfig::from_env(), std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            print_usage();
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 420.0])
            .with_title("Dark Mode Status"),
        ..Default::default()
    };

    eframe::run_native(
        "Dark Mode Status",
        options,
        Box::new(move |cc| Ok(Box::new(DarkModeApp::new(cc, &config)))),
    )
}

/// Applies command-line overrides on top of `config`.
fn parse_args(mut config: PreferenceConfig, args: impl IntoIterator<Item = String>) -> Result<PreferenceConfig> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--prefs" => {
                let path = args.next().context("--prefs needs a path")?;
                config.path = path.into();
            }
            "--format" => {
                let value = args.next().context("--format needs 'integer' or 'name'")?;
                let format: CodeFormat = value
                    .parse()
                    .with_context(|| format!("invalid --format value '{}'", value))?;
                set_format(&mut config, format);
            }
            "--names" => set_format(&mut config, CodeFormat::Name),
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("unknown argument: {}", other),
        }
    }
    Ok(config)
}

fn set_format(config: &mut PreferenceConfig, format: CodeFormat) {
    config.format = format;
    config.key = format.default_key().to_string();
}

fn print_usage() {
    println!("Dark Mode Status");
    println!("Usage: darkmode-gui [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --prefs <FILE>    Preferences file (default: <config dir>/rdarkmode/preferences.json)");
    println!("  --format <FMT>    Code format for new writes: 'integer' or 'name'");
    println!("  --names           Same as --format name");
    println!("  -h, --help        Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("  RDARKMODE_PREFS          Same as --prefs");
    println!("  RDARKMODE_CODE_FORMAT    'integer' or 'name'");
    println!("  RUST_LOG                 Log filter, e.g. RUST_LOG=rdarkmode=debug");
}

/// The demo application.
///
/// Owns the appearance controller and hands it to the panels by reference:
/// - `AppearanceCoordinator` builds the controller and wires windows into it
/// - `SettingsCoordinator` persists navigation state
/// - `PanelManager` renders each window
struct DarkModeApp {
    /// Navigation and window state
    state: AppState,
    /// Single source of truth for the appearance choice
    appearance: Controller,
}

impl DarkModeApp {
    /// Creates the app, restoring navigation and applying the saved appearance
    /// before the first frame.
    fn new(cc: &eframe::CreationContext, config: &PreferenceConfig) -> Self {
        let navigation = SettingsCoordinator::load_navigation(cc.storage);
        let appearance = AppearanceCoordinator::create_controller(&cc.egui_ctx, config);

        Self {
            state: AppState::with_navigation(navigation),
            appearance,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::AppearanceSelected(choice) => {
                self.appearance.select(choice);
            }
            PanelInteraction::NewWindowRequested => {
                let viewport = self.state.windows.open();
                AppearanceCoordinator::attach_window(&mut self.appearance, viewport);
            }
        }
    }

    fn status_text(&self) -> String {
        let directive = self
            .appearance
            .applied_directive()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!("Directive: {} | Windows: {}", directive, self.appearance.registry().len())
    }
}

impl eframe::App for DarkModeApp {
    /// Called when the app is being shut down - saves navigation state.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_navigation(storage, &self.state.navigation);
    }

    /// Renders the root window and every extra window, then handles the
    /// interactions they produced.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let choice = self.appearance.current_choice();
        let appearance = AppearanceView {
            choice,
            is_dark: AppearanceCoordinator::is_dark(ctx, choice),
        };
        let status = self.status_text();

        let mut interactions = Vec::new();
        interactions.extend(PanelManager::render_window(
            ctx,
            &mut self.state.navigation,
            appearance,
            &status,
        ));

        let mut closed = Vec::new();
        for window in self.state.windows.windows_mut() {
            let builder = egui::ViewportBuilder::default()
                .with_title(window.title())
                .with_inner_size([420.0, 360.0]);
            let viewport = window.viewport;
            let navigation = &mut window.navigation;

            let interaction = ctx.show_viewport_immediate(viewport, builder, |ctx, _class| {
                if ctx.input(|i| i.viewport().close_requested()) {
                    closed.push(viewport);
                }
                PanelManager::render_window(ctx, navigation, appearance, &status)
            });
            interactions.extend(interaction);
        }

        for viewport in closed {
            self.state.windows.close(viewport);
            AppearanceCoordinator::detach_window(&mut self.appearance, viewport);
        }

        for interaction in interactions {
            self.handle_panel_interaction(interaction);
        }
    }
}
