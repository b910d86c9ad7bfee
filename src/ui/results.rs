// SPDX-License-Identifier: MPL-2.0
//! Results screen: the six chosen photos, revealed on a staggered schedule.

use crate::catalog::PhotoId;
use crate::config::RESULT_REVEAL_DELAYS_MS;
use crate::i18n::I18n;
use crate::media::{PhotoCache, PhotoStatus};
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, Element, Length, Task};
use std::time::Duration;

/// Messages emitted by the results screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The reveal delay for one tile elapsed.
    Reveal { index: usize, generation: u64 },
    OpenGallery,
    Restart,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    OpenGallery,
    Restart,
}

/// State for the results screen (tracks which tiles are revealed).
#[derive(Debug)]
pub struct State {
    chosen: Vec<PhotoId>,
    revealed: Vec<bool>,
    generation: u64,
}

impl State {
    /// Builds the screen state and the batch of reveal timers, one per tile
    /// on the fixed delay table.
    #[must_use]
    pub fn enter(chosen: Vec<PhotoId>, generation: u64) -> (Self, Task<Message>) {
        let reveals = chosen.iter().enumerate().map(|(index, _)| {
            let delay = RESULT_REVEAL_DELAYS_MS.get(index).copied().unwrap_or(0);
            after(delay, Message::Reveal { index, generation })
        });
        let task = Task::batch(reveals);

        let revealed = vec![false; chosen.len()];
        (
            Self {
                chosen,
                revealed,
                generation,
            },
            task,
        )
    }

    /// Photos in choice order.
    pub fn chosen(&self) -> &[PhotoId] {
        &self.chosen
    }

    /// Processes a results message and returns the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Reveal { index, generation } => {
                if generation == self.generation {
                    if let Some(slot) = self.revealed.get_mut(index) {
                        *slot = true;
                    }
                }
                Event::None
            }
            Message::OpenGallery => Event::OpenGallery,
            Message::Restart => Event::Restart,
        }
    }

    /// Renders the results screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("results-title")).size(typography::TITLE_LG);

        let tiles = self
            .chosen
            .iter()
            .zip(&self.revealed)
            .map(|(id, revealed)| self.result_tile(&ctx, id, *revealed))
            .fold(row![].spacing(spacing::SM), |tiles, tile| tiles.push(tile));

        let actions = row![
            button(text(ctx.i18n.tr("results-gallery-button")).size(typography::BODY))
                .on_press(Message::OpenGallery)
                .style(styles::button::primary)
                .padding(spacing::SM),
            button(text(ctx.i18n.tr("results-restart-button")).size(typography::BODY))
                .on_press(Message::Restart)
                .style(styles::button::primary)
                .padding(spacing::SM),
        ]
        .spacing(spacing::MD);

        container(
            column![title, tiles, actions]
                .spacing(spacing::XL)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
    }

    fn result_tile<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        id: &'a PhotoId,
        revealed: bool,
    ) -> Element<'a, Message> {
        if !revealed {
            // Hold the slot so tiles do not shift as reveals land.
            return Space::new()
                .width(Length::Fixed(sizing::RESULT_TILE_EDGE))
                .height(Length::Fixed(sizing::RESULT_TILE_EDGE))
                .into();
        }

        match ctx.photos.status(id) {
            PhotoStatus::Ready(photo) => image(photo.handle.clone())
                .width(Length::Fixed(sizing::RESULT_TILE_EDGE))
                .height(Length::Fixed(sizing::RESULT_TILE_EDGE))
                .into(),
            PhotoStatus::Loading => placeholder::loading_tile(
                ctx.i18n,
                sizing::RESULT_TILE_EDGE,
                sizing::RESULT_TILE_EDGE,
            ),
            PhotoStatus::Failed => placeholder::failed_tile(
                ctx.i18n,
                sizing::RESULT_TILE_EDGE,
                sizing::RESULT_TILE_EDGE,
            ),
        }
    }
}

/// Environment information required to render the results screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photos: &'a PhotoCache,
}

fn after(delay_ms: u64, message: Message) -> Task<Message> {
    Task::perform(
        tokio::time::sleep(Duration::from_millis(delay_ms)),
        move |_| message.clone(),
    )
}
