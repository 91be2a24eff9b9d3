//! Appearance preference model.
//!
//! Defines the three appearance choices, the display directive each one maps to,
//! and the persisted code used to store a choice between sessions.
//!
//! # Examples
//!
//! ```
//! use rdarkmode::{AppearanceChoice, CodeFormat, DisplayDirective, PersistedCode};
//!
//! let code = AppearanceChoice::Dark.encode(CodeFormat::Integer);
//! assert_eq!(code, PersistedCode::Integer(2));
//! assert_eq!(AppearanceChoice::decode(Some(&code)), AppearanceChoice::Dark);
//! assert_eq!(AppearanceChoice::decode(None), AppearanceChoice::FollowSystem);
//! assert_eq!(AppearanceChoice::Light.directive(), DisplayDirective::ForceLight);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// The user's appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppearanceChoice {
    /// Defer to the host OS theme
    #[default]
    FollowSystem,
    Light,
    Dark,
}

/// Rendering mode pushed to a presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayDirective {
    /// No override, the OS theme decides
    Unspecified,
    ForceLight,
    ForceDark,
}

/// On-disk representation of an [`AppearanceChoice`].
///
/// Stored either as a small integer (0 = system, 1 = light, 2 = dark) or as the
/// choice's label ("System", "Light", "Dark").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersistedCode {
    Integer(i64),
    Name(String),
}

/// Which flavor of [`PersistedCode`] new writes use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeFormat {
    #[default]
    Integer,
    Name,
}

impl AppearanceChoice {
    /// All choices in the order a picker lists them.
    pub const ALL: [AppearanceChoice; 3] = [
        AppearanceChoice::FollowSystem,
        AppearanceChoice::Light,
        AppearanceChoice::Dark,
    ];

    /// Human-readable label, also used as the string code.
    pub fn label(self) -> &'static str {
        match self {
            AppearanceChoice::FollowSystem => "System",
            AppearanceChoice::Light => "Light",
            AppearanceChoice::Dark => "Dark",
        }
    }

    /// Integer code for this choice.
    pub fn code(self) -> i64 {
        match self {
            AppearanceChoice::FollowSystem => 0,
            AppearanceChoice::Light => 1,
            AppearanceChoice::Dark => 2,
        }
    }

    /// Display directive realizing this choice.
    pub fn directive(self) -> DisplayDirective {
        match self {
            AppearanceChoice::FollowSystem => DisplayDirective::Unspecified,
            AppearanceChoice::Light => DisplayDirective::ForceLight,
            AppearanceChoice::Dark => DisplayDirective::ForceDark,
        }
    }

    /// Whether this choice defers to the OS theme.
    pub fn follows_system(self) -> bool {
        matches!(self, AppearanceChoice::FollowSystem)
    }

    /// Whether surfaces end up dark, given what the OS currently shows.
    pub fn resolves_dark(self, system_is_dark: bool) -> bool {
        match self {
            AppearanceChoice::FollowSystem => system_is_dark,
            AppearanceChoice::Light => false,
            AppearanceChoice::Dark => true,
        }
    }

    /// Encodes this choice for the store.
    pub fn encode(self, format: CodeFormat) -> PersistedCode {
        match format {
            CodeFormat::Integer => PersistedCode::Integer(self.code()),
            CodeFormat::Name => PersistedCode::Name(self.label().to_string()),
        }
    }

    /// Maps a persisted code back to a choice, if it is one of the known values.
    ///
    /// Both integer and name codes are recognized regardless of the configured
    /// [`CodeFormat`].
    pub fn try_decode(code: &PersistedCode) -> Option<Self> {
        match code {
            PersistedCode::Integer(value) => Self::ALL.into_iter().find(|c| c.code() == *value),
            PersistedCode::Name(name) => Self::ALL.into_iter().find(|c| c.label() == name.as_str()),
        }
    }

    /// Decodes a stored value; absent or unrecognized values resolve to
    /// [`AppearanceChoice::FollowSystem`].
    pub fn decode(code: Option<&PersistedCode>) -> Self {
        match code {
            None => AppearanceChoice::FollowSystem,
            Some(code) => Self::try_decode(code).unwrap_or_else(|| {
                log::warn!("Unrecognized appearance code {:?}, following system", code);
                AppearanceChoice::FollowSystem
            }),
        }
    }
}

impl fmt::Display for AppearanceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DisplayDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayDirective::Unspecified => "unspecified",
            DisplayDirective::ForceLight => "force light",
            DisplayDirective::ForceDark => "force dark",
        })
    }
}

impl From<DisplayDirective> for egui::ThemePreference {
    fn from(directive: DisplayDirective) -> Self {
        match directive {
            DisplayDirective::Unspecified => egui::ThemePreference::System,
            DisplayDirective::ForceLight => egui::ThemePreference::Light,
            DisplayDirective::ForceDark => egui::ThemePreference::Dark,
        }
    }
}

impl From<DisplayDirective> for egui::SystemTheme {
    fn from(directive: DisplayDirective) -> Self {
        match directive {
            DisplayDirective::Unspecified => egui::SystemTheme::SystemDefault,
            DisplayDirective::ForceLight => egui::SystemTheme::Light,
            DisplayDirective::ForceDark => egui::SystemTheme::Dark,
        }
    }
}

impl CodeFormat {
    /// Conventional store key for this format.
    pub fn default_key(self) -> &'static str {
        match self {
            CodeFormat::Integer => "userInterfaceStyle",
            CodeFormat::Name => "appearanceSelection",
        }
    }
}

impl FromStr for CodeFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(CodeFormat::Integer),
            "name" | "string" => Ok(CodeFormat::Name),
            _ => Err(ConfigError::UnknownCodeFormat(s.to_string())),
        }
    }
}
