// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The Iced theme for this mode, with the brand color as primary.
    #[must_use]
    pub fn theme(self) -> Theme {
        let (name, base) = if self.is_dark() {
            ("Majlis Dark", Palette::DARK)
        } else {
            ("Majlis Light", Palette::LIGHT)
        };
        Theme::custom(
            name.to_string(),
            Palette {
                primary: palette::BRAND_500,
                success: palette::SUCCESS_500,
                danger: palette::ERROR_500,
                ..base
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; must not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn themes_use_brand_primary() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.theme().palette().primary, palette::BRAND_500);
        }
        assert!(ThemeMode::Dark.theme().palette().background.r < 0.5);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let toml = toml::to_string(&Wrapper {
            mode: ThemeMode::System,
        })
        .expect("serialize");
        assert!(toml.contains("mode = \"system\""));
    }

    #[derive(Serialize)]
    struct Wrapper {
        mode: ThemeMode,
    }
}
