// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Single source of truth for colors, opacity levels, spacing, sizing,
//! typography, and radii used across the screens. Keep ratios intact when
//! adjusting (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand rose tones
    pub const ROSE_400: Color = Color::from_rgb(0.93, 0.62, 0.69);
    pub const ROSE_500: Color = Color::from_rgb(0.86, 0.51, 0.59);
    pub const ROSE_600: Color = Color::from_rgb(0.76, 0.4, 0.49);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.8, 0.25, 0.25);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Modal backdrop dimming.
    pub const OVERLAY_STRONG: f32 = 0.8;
    /// Subtle borders over photos.
    pub const OVERLAY_SUBTLE: f32 = 0.25;
    /// Panel surfaces derived from the theme background.
    pub const SURFACE: f32 = 0.92;
    /// Disabled interactive elements.
    pub const DISABLED: f32 = 0.5;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Width of one quiz choice card.
    pub const CHOICE_CARD_WIDTH: f32 = 320.0;
    /// Edge of a result tile.
    pub const RESULT_TILE_EDGE: f32 = 150.0;
    /// Edge of a gallery thumbnail.
    pub const GALLERY_TILE_EDGE: f32 = 180.0;
    /// Gallery columns per row.
    pub const GALLERY_COLUMNS: usize = 4;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 16.0;
    pub const TITLE: f32 = 22.0;
    pub const TITLE_LG: f32 = 28.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}
