// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection with system detection.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// User theme preference: follow the OS, or force light/dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolves the preference into a concrete Iced theme.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    Theme::Light
                } else {
                    // Default to dark for Dark mode or on detection error
                    Theme::Dark
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn serde_round_trip_uses_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            theme_mode: ThemeMode,
        }

        let serialized = toml::to_string(&Wrapper {
            theme_mode: ThemeMode::Dark,
        })
        .expect("serialize should succeed");
        assert!(serialized.contains("\"dark\""));

        let parsed: Wrapper =
            toml::from_str("theme_mode = \"light\"").expect("parse should succeed");
        assert_eq!(parsed.theme_mode, ThemeMode::Light);
    }
}
