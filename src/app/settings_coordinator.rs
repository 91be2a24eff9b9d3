//! UI settings persistence coordination.
//!
//! Persists non-appearance UI state (the root window's navigation) in eframe's
//! storage as JSON strings. The appearance preference has its own store and is
//! never written here.

use serde::{Deserialize, Serialize};

use crate::state::NavigationState;

const NAVIGATION_KEY: &str = "navigation";

/// Coordinates UI settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the root window's navigation, falling back to the home screen.
    pub fn load_navigation(storage: Option<&dyn eframe::Storage>) -> NavigationState {
        Self::load_setting(storage, NAVIGATION_KEY)
    }

    /// Saves the root window's navigation.
    pub fn save_navigation(storage: &mut dyn eframe::Storage, navigation: &NavigationState) {
        Self::save_setting(storage, NAVIGATION_KEY, navigation);
    }

    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// Unparseable values are logged and replaced by `T::default()`.
    fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let Some(json_str) = storage.and_then(|s| s.get_string(key)) else {
            return T::default();
        };

        serde_json::from_str(&json_str).unwrap_or_else(|err| {
            log::warn!("Ignoring stored setting '{}': {}", key, err);
            T::default()
        })
    }

    /// Saves a setting to persistent storage.
    fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => log::warn!("Could not serialize setting '{}': {}", key, err),
        }
    }
}
