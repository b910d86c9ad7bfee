// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, plus the modal overlay composition.

use super::{App, Message, Screen};
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::{gallery, quiz, results, viewer};
use iced::widget::{center, column, container, mouse_area, opaque, stack, text};
use iced::{Element, Length};

/// Renders the current application view based on the active screen, with
/// the photo viewer stacked on top when open.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Quiz => view_quiz(app),
        Screen::Results => view_results(app),
        Screen::Gallery => view_gallery(app),
    };

    let base = with_config_warning(app, screen);

    match &app.viewer {
        Some(viewer_state) => {
            let card = viewer_state
                .view(viewer::ViewContext {
                    i18n: &app.i18n,
                    photos: &app.photos,
                })
                .map(Message::Viewer);
            modal_overlay(base, card)
        }
        None => base,
    }
}

fn view_quiz(app: &App) -> Element<'_, Message> {
    if let Some(error) = &app.catalog_error {
        return placeholder::empty_state(&app.i18n, error);
    }

    match &app.quiz {
        Some(quiz_state) => quiz_state
            .view(quiz::ViewContext {
                i18n: &app.i18n,
                photos: &app.photos,
            })
            .map(Message::Quiz),
        None => container(text(app.i18n.tr("quiz-loading")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}

fn view_results(app: &App) -> Element<'_, Message> {
    match &app.results {
        Some(results_state) => results_state
            .view(results::ViewContext {
                i18n: &app.i18n,
                photos: &app.photos,
            })
            .map(Message::Results),
        None => container(text(app.i18n.tr("results-title")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}

fn view_gallery(app: &App) -> Element<'_, Message> {
    match &app.catalog {
        Some(catalog) => gallery::view(gallery::ViewContext {
            i18n: &app.i18n,
            photos: &app.photos,
            catalog,
        })
        .map(Message::Gallery),
        None => container(text(app.i18n.tr("gallery-title")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}

/// Appends the settings-file warning line when the config had to be ignored.
fn with_config_warning<'a>(app: &'a App, content: Element<'a, Message>) -> Element<'a, Message> {
    match app.config_warning {
        Some(key) => column![
            container(content).width(Length::Fill).height(Length::Fill),
            container(text(app.i18n.tr(key)).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::XS),
        ]
        .into(),
        None => content,
    }
}

/// Stacks the viewer card over the base screen behind a dimmed, clickable
/// backdrop.
fn modal_overlay<'a>(
    base: Element<'a, Message>,
    card: Element<'a, Message>,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(card)).style(styles::container::backdrop))
                .on_press(Message::Viewer(viewer::Message::CloseRequested))
        )
    ]
    .into()
}
