use rdarkmode::{AppearanceChoice, AppearanceController, CodeFormat, DisplayDirective, PersistedCode};
use rdarkmode::{FileStore, MemoryStore, PreferenceConfig, PreferenceStore, ViewportRegistry};
use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_prefs(name: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("rdarkmode_it_{}_{}.json", name, std::process::id()));
    // Clean up any existing file
    let _ = fs::remove_file(&path);
    path
}

fn file_controller(path: &PathBuf, format: CodeFormat) -> AppearanceController<ViewportRegistry> {
    let store = FileStore::new(path, format.default_key());
    AppearanceController::new(Box::new(store), ViewportRegistry::new(egui::Context::default()))
        .with_format(format)
}

#[test]
fn test_select_survives_restart() -> Result<()> {
    let path = temp_prefs("restart");

    {
        let mut controller = file_controller(&path, CodeFormat::Integer);
        controller.initialize();
        assert_eq!(controller.current_choice(), AppearanceChoice::FollowSystem);

        controller.select(AppearanceChoice::Light);
    }

    // Simulated restart: new controller, new context, same file
    let ctx = egui::Context::default();
    let store = FileStore::new(&path, "userInterfaceStyle");
    let mut controller = AppearanceController::new(Box::new(store), ViewportRegistry::new(ctx.clone()));
    controller.initialize();

    assert_eq!(controller.current_choice(), AppearanceChoice::Light);
    assert_eq!(controller.applied_directive(), Some(DisplayDirective::ForceLight));
    assert_eq!(ctx.options(|o| o.theme_preference), egui::ThemePreference::Light);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_select_dark_writes_code_two() -> Result<()> {
    let path = temp_prefs("dark");

    let mut controller = file_controller(&path, CodeFormat::Integer);
    controller.initialize();
    controller.select(AppearanceChoice::Dark);

    assert_eq!(controller.current_choice(), AppearanceChoice::Dark);
    let fresh = FileStore::new(&path, "userInterfaceStyle");
    assert_eq!(fresh.read(), Some(PersistedCode::Integer(2)));

    // On-disk layout is a JSON object holding the single key
    let contents: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(contents, serde_json::json!({"userInterfaceStyle": 2}));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_name_format_writes_label() -> Result<()> {
    let path = temp_prefs("names");

    let mut controller = file_controller(&path, CodeFormat::Name);
    controller.initialize();
    controller.select(AppearanceChoice::Dark);

    let contents: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(contents, serde_json::json!({"appearanceSelection": "Dark"}));

    let mut restarted = file_controller(&path, CodeFormat::Name);
    restarted.initialize();
    assert_eq!(restarted.current_choice(), AppearanceChoice::Dark);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_unrecognized_file_value_follows_system() -> Result<()> {
    let path = temp_prefs("unrecognized");
    fs::write(&path, r#"{"userInterfaceStyle": 5}"#)?;

    let mut controller = file_controller(&path, CodeFormat::Integer);
    controller.initialize();

    assert_eq!(controller.current_choice(), AppearanceChoice::FollowSystem);
    assert_eq!(controller.applied_directive(), Some(DisplayDirective::Unspecified));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_unwritable_store_degrades_to_memory_state() -> Result<()> {
    // A directory where the file should be makes every read and write fail
    let path = temp_prefs("unwritable");
    fs::create_dir_all(&path)?;

    let mut controller = file_controller(&path, CodeFormat::Integer);
    controller.initialize();
    assert_eq!(controller.current_choice(), AppearanceChoice::FollowSystem);

    controller.select(AppearanceChoice::Dark);
    assert_eq!(controller.current_choice(), AppearanceChoice::Dark);
    assert_eq!(controller.applied_directive(), Some(DisplayDirective::ForceDark));

    fs::remove_dir_all(&path)?;
    Ok(())
}

#[test]
fn test_initialize_twice_same_result() {
    let store = MemoryStore::with_value(PersistedCode::Integer(1));
    let ctx = egui::Context::default();
    let mut controller = AppearanceController::new(Box::new(store), ViewportRegistry::new(ctx.clone()));

    controller.initialize();
    let first = (controller.current_choice(), controller.applied_directive());
    controller.initialize();
    let second = (controller.current_choice(), controller.applied_directive());

    assert_eq!(first, second);
    assert_eq!(first, (AppearanceChoice::Light, Some(DisplayDirective::ForceLight)));
    assert_eq!(ctx.options(|o| o.theme_preference), egui::ThemePreference::Light);
}

#[test]
fn test_select_reaches_every_window() {
    let store = MemoryStore::new();
    let mut registry = ViewportRegistry::new(egui::Context::default());
    registry.attach(egui::ViewportId::from_hash_of("second"));
    registry.attach(egui::ViewportId::from_hash_of("third"));

    let mut controller = AppearanceController::new(Box::new(store), registry);
    controller.initialize();
    controller.select(AppearanceChoice::Dark);

    let surfaces = controller.registry().surfaces();
    assert_eq!(surfaces.len(), 3);
    for surface in surfaces {
        assert_eq!(surface.applied_directive(), Some(DisplayDirective::ForceDark));
    }
}

#[test]
fn test_config_drives_file_store() -> Result<()> {
    let mut config = PreferenceConfig::with_format(CodeFormat::Name);
    config.path = temp_prefs("config");

    let mut store = FileStore::from_config(&config);
    assert_eq!(store.key(), "appearanceSelection");
    store.write(AppearanceChoice::Light.encode(config.format));
    assert_eq!(
        AppearanceChoice::decode(store.read().as_ref()),
        AppearanceChoice::Light
    );

    fs::remove_file(&config.path)?;
    Ok(())
}

#[test]
fn test_switching_to_name_format_keeps_choice() -> Result<()> {
    let path = temp_prefs("format_switch");

    let mut integer_config = PreferenceConfig::with_format(CodeFormat::Integer);
    integer_config.path = path.clone();
    {
        let store = FileStore::from_config(&integer_config);
        let mut controller = AppearanceController::new(Box::new(store), ViewportRegistry::new(egui::Context::default()))
            .with_format(integer_config.format);
        controller.initialize();
        controller.select(AppearanceChoice::Dark);
    }

    // Same file, now configured for name codes under the name-format key
    let mut name_config = PreferenceConfig::with_format(CodeFormat::Name);
    name_config.path = path.clone();
    let store = FileStore::from_config(&name_config);
    let mut controller = AppearanceController::new(Box::new(store), ViewportRegistry::new(egui::Context::default()))
        .with_format(name_config.format);
    controller.initialize();
    assert_eq!(controller.current_choice(), AppearanceChoice::Dark);

    // The next selection lands under the name key and wins from then on
    controller.select(AppearanceChoice::Light);
    let contents: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(contents["appearanceSelection"], "Light");
    assert_eq!(contents["userInterfaceStyle"], 2);

    let mut restarted = AppearanceController::new(
        Box::new(FileStore::from_config(&name_config)),
        ViewportRegistry::new(egui::Context::default()),
    );
    restarted.initialize();
    assert_eq!(restarted.current_choice(), AppearanceChoice::Light);

    fs::remove_file(&path)?;
    Ok(())
}
