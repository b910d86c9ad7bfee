// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (open gallery, play again).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ROSE_400,
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..palette::ROSE_500
        },
        _ => palette::ROSE_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ROSE_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Frame around a quiz choice card. The chosen card keeps a rose accent
/// through the hold window so the pick reads before the transition.
pub fn choice_card(chosen: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = if chosen {
            palette::ROSE_500
        } else if matches!(status, button::Status::Hovered) {
            palette::ROSE_400
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: None,
            text_color: palette::WHITE,
            border: Border {
                color: border_color,
                width: 3.0,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Borderless tile button used in the gallery grid.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = if matches!(status, button::Status::Hovered) {
        palette::ROSE_400
    } else {
        Color::TRANSPARENT
    };

    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Close button in the modal viewer corner.
pub fn viewer_close(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette::ROSE_500,
        _ => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette_ext.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}
