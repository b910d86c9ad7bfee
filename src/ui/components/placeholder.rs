// SPDX-License-Identifier: MPL-2.0
//! Placeholder tiles and the catalog empty state.
//!
//! Every screen renders photos through the cache, so each needs something to
//! show while a decode is pending or after it failed. The empty state covers
//! the one startup failure the app can hit: an unusable photo directory.

use crate::error::CatalogError;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

/// Tile shown while a photo decode is still in flight.
pub fn loading_tile<'a, Message: 'a>(
    i18n: &I18n,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    tile(i18n.tr("quiz-loading"), width, height)
}

/// Tile shown when a photo decode failed.
pub fn failed_tile<'a, Message: 'a>(i18n: &I18n, width: f32, height: f32) -> Element<'a, Message> {
    tile(i18n.tr("quiz-photo-failed"), width, height)
}

fn tile<'a, Message: 'a>(label: String, width: f32, height: f32) -> Element<'a, Message> {
    container(text(label).size(typography::BODY))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(styles::container::placeholder)
        .into()
}

/// Full-screen message when the photo directory cannot supply a catalog.
pub fn empty_state<'a, Message: 'a>(i18n: &I18n, error: &CatalogError) -> Element<'a, Message> {
    let content = column![
        text(i18n.tr("quiz-empty-title")).size(typography::TITLE_LG),
        text(i18n.tr(error.i18n_key())).size(typography::BODY),
        text(error.path().to_string()).size(typography::BODY),
        text(i18n.tr("quiz-empty-hint")).size(typography::BODY),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
