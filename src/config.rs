//! Preference store configuration.
//!
//! Resolves where the appearance preference lives on disk, under which key,
//! and in which code format. Defaults can be overridden from the environment:
//! - `RDARKMODE_PREFS` - path of the preferences file
//! - `RDARKMODE_CODE_FORMAT` - `integer` or `name`

use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::appearance::CodeFormat;

pub const PREFS_PATH_ENV: &str = "RDARKMODE_PREFS";
pub const CODE_FORMAT_ENV: &str = "RDARKMODE_CODE_FORMAT";

const APP_DIR: &str = "rdarkmode";
const PREFS_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown code format '{0}' (expected 'integer' or 'name')")]
    UnknownCodeFormat(String),
}

/// Location and encoding of the persisted appearance preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceConfig {
    /// JSON file holding the preference key
    pub path: PathBuf,
    /// Key the appearance code is stored under
    pub key: String,
    /// Format used when writing the code
    pub format: CodeFormat,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self::with_format(CodeFormat::default())
    }
}

impl PreferenceConfig {
    /// Default configuration for a code format, using that format's key.
    pub fn with_format(format: CodeFormat) -> Self {
        Self {
            path: default_prefs_path(),
            key: format.default_key().to_string(),
            format,
        }
    }

    /// Default configuration with environment overrides applied.
    ///
    /// Invalid override values are logged and ignored.
    pub fn from_env() -> Self {
        let format = match env::var(CODE_FORMAT_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|err: ConfigError| {
                log::warn!("Ignoring {}: {}", CODE_FORMAT_ENV, err);
                CodeFormat::default()
            }),
            Err(_) => CodeFormat::default(),
        };

        let mut config = Self::with_format(format);
        if let Some(path) = env::var_os(PREFS_PATH_ENV).filter(|p| !p.is_empty()) {
            config.path = PathBuf::from(path);
        }
        config
    }
}

/// `<config dir>/rdarkmode/preferences.json`, or the working directory if the
/// platform has no config dir.
pub fn default_prefs_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_default()
        .join(PREFS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_integer_key() {
        let config = PreferenceConfig::default();
        assert_eq!(config.format, CodeFormat::Integer);
        assert_eq!(config.key, "userInterfaceStyle");
        assert!(config.path.ends_with("preferences.json"));
    }

    #[test]
    fn test_name_format_key() {
        let config = PreferenceConfig::with_format(CodeFormat::Name);
        assert_eq!(config.key, "appearanceSelection");
    }
}
