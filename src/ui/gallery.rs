// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the full catalog in a grid, each tile opening the viewer.

use crate::catalog::{Catalog, PhotoId};
use crate::i18n::I18n;
use crate::media::{PhotoCache, PhotoStatus};
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, Element, Length};

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    PhotoPressed(PhotoId),
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenViewer(PhotoId),
    Back,
}

/// Process a gallery message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::PhotoPressed(id) => Event::OpenViewer(id),
        Message::Back => Event::Back,
    }
}

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photos: &'a PhotoCache,
    pub catalog: &'a Catalog,
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let back = button(text(ctx.i18n.tr("gallery-back-button")).size(typography::BODY))
        .on_press(Message::Back)
        .style(styles::button::primary)
        .padding(spacing::SM);

    let mut grid = column![].spacing(spacing::SM).align_x(Alignment::Center);
    for chunk in ctx.catalog.photos().chunks(sizing::GALLERY_COLUMNS) {
        let mut tiles = row![].spacing(spacing::SM);
        for photo in chunk {
            tiles = tiles.push(tile(&ctx, &photo.id));
        }
        grid = grid.push(tiles);
    }

    container(
        column![title, scrollable(grid).height(Length::Fill), back]
            .spacing(spacing::LG)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Alignment::Center)
    .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, id: &'a PhotoId) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.photos.status(id) {
        PhotoStatus::Ready(photo) => image(photo.handle.clone())
            .width(Length::Fixed(sizing::GALLERY_TILE_EDGE))
            .height(Length::Fixed(sizing::GALLERY_TILE_EDGE))
            .into(),
        PhotoStatus::Loading => placeholder::loading_tile(
            ctx.i18n,
            sizing::GALLERY_TILE_EDGE,
            sizing::GALLERY_TILE_EDGE,
        ),
        PhotoStatus::Failed => placeholder::failed_tile(
            ctx.i18n,
            sizing::GALLERY_TILE_EDGE,
            sizing::GALLERY_TILE_EDGE,
        ),
    };

    button(content)
        .on_press(Message::PhotoPressed(id.clone()))
        .style(styles::button::tile)
        .padding(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_press_opens_the_viewer() {
        let id = PhotoId::new("photo.jpeg");
        assert_eq!(
            update(Message::PhotoPressed(id.clone())),
            Event::OpenViewer(id)
        );
    }

    #[test]
    fn back_returns_to_results() {
        assert_eq!(update(Message::Back), Event::Back);
    }
}
