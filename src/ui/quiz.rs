// SPDX-License-Identifier: MPL-2.0
//! Quiz screen component encapsulating state and update logic.
//!
//! The component owns the session plus everything the screen needs between
//! presentation and transition: the pair currently on screen, the phase of
//! the step, and the generation token guarding delayed transitions. The pair
//! shown to the user stays on screen through the hold and exit windows even
//! though the session has already consumed it.

use crate::catalog::PhotoId;
use crate::config::{
    FINAL_REVEAL_DELAY_MS, FINAL_STEP_INDEX, POST_CHOICE_DELAY_MS, STEP_TRANSITION_MS,
};
use crate::error::SessionError;
use crate::i18n::I18n;
use crate::media::{PhotoCache, PhotoStatus};
use crate::quiz::QuizSession;
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length, Task};
use rand::rngs::SmallRng;
use std::time::Duration;

/// Messages emitted by the quiz screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user pressed one of the two presented photos.
    PhotoChosen(PhotoId),
    /// The post-choice hold window elapsed.
    HoldElapsed { generation: u64 },
    /// The exit transition window elapsed.
    ExitElapsed { generation: u64 },
}

/// Side effects the application should perform after handling a quiz message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// All steps are decided; the app should enter the results screen.
    SessionComplete,
}

/// Where the current step sits between presentation and transition.
///
/// Input is accepted only while `Presenting`; the hold and exit windows keep
/// every card inert so a double tap cannot land a second choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Presenting,
    Holding,
    Exiting,
}

/// Complete quiz screen state.
#[derive(Debug)]
pub struct State {
    session: QuizSession,
    /// Pair kept for rendering through hold and exit, after the session has
    /// consumed it.
    displayed: Option<[PhotoId; 2]>,
    /// Step index the displayed pair belongs to.
    displayed_step: usize,
    /// The choice that landed on the displayed pair, if any.
    last_choice: Option<PhotoId>,
    phase: Phase,
    /// Token carried by delayed messages; stale tokens are discarded, which
    /// makes every scheduled transition cancelable by replacing the state.
    generation: u64,
    error: Option<SessionError>,
}

impl State {
    /// Starts a fresh session over `items` and presents the first pair.
    #[must_use]
    pub fn new(items: Vec<PhotoId>, rng: SmallRng, generation: u64) -> Self {
        let mut state = Self {
            session: QuizSession::start(items, rng),
            displayed: None,
            displayed_step: 0,
            last_choice: None,
            phase: Phase::Presenting,
            generation,
            error: None,
        };
        state.present_current_step();
        state
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// The pair currently on screen.
    pub fn displayed_pair(&self) -> Option<&[PhotoId; 2]> {
        self.displayed.as_ref()
    }

    /// Whether the displayed step is the last one, whose options stay
    /// obscured until the choice lands.
    #[must_use]
    pub fn is_obscured_step(&self) -> bool {
        self.displayed_step == FINAL_STEP_INDEX
    }

    /// Processes a quiz message and returns the resulting effect plus any
    /// follow-up task to schedule.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::PhotoChosen(id) => self.handle_choice(id),
            Message::HoldElapsed { generation } => {
                if generation != self.generation || self.phase != Phase::Holding {
                    return (Effect::None, Task::none());
                }
                self.phase = Phase::Exiting;
                (
                    Effect::None,
                    after(
                        STEP_TRANSITION_MS,
                        Message::ExitElapsed { generation },
                    ),
                )
            }
            Message::ExitElapsed { generation } => {
                if generation != self.generation || self.phase != Phase::Exiting {
                    return (Effect::None, Task::none());
                }
                if self.session.is_complete() {
                    (Effect::SessionComplete, Task::none())
                } else {
                    self.present_current_step();
                    (Effect::None, Task::none())
                }
            }
        }
    }

    fn handle_choice(&mut self, id: PhotoId) -> (Effect, Task<Message>) {
        if self.phase != Phase::Presenting {
            // The step is already decided; the cards are inert.
            return (Effect::None, Task::none());
        }

        match self.session.choose(&id) {
            Ok(()) => {
                self.last_choice = Some(id);
                self.phase = Phase::Holding;
                let delay = if self.session.is_complete() {
                    FINAL_REVEAL_DELAY_MS
                } else {
                    POST_CHOICE_DELAY_MS
                };
                let generation = self.generation;
                (
                    Effect::None,
                    after(delay, Message::HoldElapsed { generation }),
                )
            }
            // Identifier outside the presented pair; the step stays pending.
            Err(_) => (Effect::None, Task::none()),
        }
    }

    /// Draws and displays the pair for the session's current step.
    fn present_current_step(&mut self) {
        self.last_choice = None;
        self.phase = Phase::Presenting;
        self.displayed_step = self.session.step();
        match self.session.present_choices() {
            Ok(pair) => {
                self.displayed = Some(pair);
                self.error = None;
            }
            Err(error) => {
                self.displayed = None;
                self.error = Some(error);
            }
        }
    }

    /// Renders the quiz screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if let Some(error) = &self.error {
            return container(text(ctx.i18n.tr(error.i18n_key())).size(typography::TITLE))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .into();
        }

        let Some(pair) = &self.displayed else {
            return container(text(ctx.i18n.tr("quiz-loading")))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .into();
        };

        let question_key = format!("quiz-question-{}", self.displayed_step + 1);
        let title = container(text(ctx.i18n.tr(&question_key)).size(typography::TITLE))
            .padding(spacing::MD)
            .style(styles::container::panel);

        let cards = row![
            self.choice_card(&ctx, &pair[0]),
            self.choice_card(&ctx, &pair[1]),
        ]
        .spacing(spacing::LG)
        .align_y(Alignment::Center);

        container(
            column![title, cards]
                .spacing(spacing::XL)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
    }

    fn choice_card<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        id: &'a PhotoId,
    ) -> Element<'a, Message> {
        let chosen = self.last_choice.as_ref() == Some(id);
        let obscured = self.is_obscured_step() && !chosen;

        let content: Element<'a, Message> = match ctx.photos.status(id) {
            PhotoStatus::Ready(photo) => {
                let handle = if obscured {
                    photo.obscured.clone()
                } else {
                    photo.handle.clone()
                };
                image(handle)
                    .width(Length::Fixed(sizing::CHOICE_CARD_WIDTH))
                    .into()
            }
            PhotoStatus::Loading => placeholder::loading_tile(
                ctx.i18n,
                sizing::CHOICE_CARD_WIDTH,
                sizing::CHOICE_CARD_WIDTH,
            ),
            PhotoStatus::Failed => placeholder::failed_tile(
                ctx.i18n,
                sizing::CHOICE_CARD_WIDTH,
                sizing::CHOICE_CARD_WIDTH,
            ),
        };

        let accepts_input = self.phase == Phase::Presenting;
        button(content)
            .on_press_maybe(accepts_input.then(|| Message::PhotoChosen(id.clone())))
            .style(styles::button::choice_card(chosen))
            .padding(spacing::XS)
            .into()
    }
}

/// Environment information required to render the quiz screen.
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
