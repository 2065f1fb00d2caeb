// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (submit, join, post).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border, lift) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::BRAND_500, palette::BRAND_600, shadow::SM)
        }
        button::Status::Hovered => (palette::BRAND_400, palette::BRAND_500, shadow::MD),
        button::Status::Disabled => {
            return button::Style {
                background: Some(Background::Color(palette::GRAY_200)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: lift,
        snap: true,
    }
}

/// Borderless text button (back, cancel, language switch).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: 0.1,
            ..text
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: match status {
            button::Status::Disabled => Color { a: 0.5, ..text },
            _ => text,
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
