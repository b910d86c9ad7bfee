// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers that interpret component effects: session completion, gallery
//! navigation, viewer lifecycle, and session restarts.

use super::{App, Message, Screen};
use crate::catalog::Catalog;
use crate::media;
use crate::ui::{gallery, quiz, results, viewer};
use iced::Task;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Quiz(message) => handle_quiz_message(app, message),
        Message::Results(message) => handle_results_message(app, message),
        Message::Gallery(message) => handle_gallery_message(app, message),
        Message::Viewer(message) => handle_viewer_message(app, message),
        Message::PhotoLoaded { id, result } => {
            match result {
                Ok(data) => app.photos.insert(id, data),
                Err(_) => app.photos.mark_failed(id),
            }
            Task::none()
        }
    }
}

/// Spawns one decode task per catalog photo.
pub(super) fn spawn_photo_loads(catalog: &Catalog) -> Task<Message> {
    Task::batch(catalog.photos().iter().map(|photo| {
        let id = photo.id.clone();
        let path = photo.path.clone();
        Task::perform(async move { media::load_photo(&path) }, move |result| {
            Message::PhotoLoaded {
                id: id.clone(),
                result,
            }
        })
    }))
}

fn handle_quiz_message(app: &mut App, message: quiz::Message) -> Task<Message> {
    let Some(quiz_state) = app.quiz.as_mut() else {
        return Task::none();
    };

    let (effect, task) = quiz_state.handle_message(message);
    let task = task.map(Message::Quiz);

    match effect {
        quiz::Effect::SessionComplete => {
            let chosen = quiz_state.session().chosen().to_vec();
            let generation = app.next_generation();
            let (state, reveal_task) = results::State::enter(chosen, generation);
            app.results = Some(state);
            app.screen = Screen::Results;
            Task::batch([task, reveal_task.map(Message::Results)])
        }
        quiz::Effect::None => task,
    }
}

fn handle_results_message(app: &mut App, message: results::Message) -> Task<Message> {
    let Some(results_state) = app.results.as_mut() else {
        return Task::none();
    };

    match results_state.update(message) {
        results::Event::OpenGallery => {
            app.screen = Screen::Gallery;
            Task::none()
        }
        results::Event::Restart => restart_session(app),
        results::Event::None => Task::none(),
    }
}

fn handle_gallery_message(app: &mut App, message: gallery::Message) -> Task<Message> {
    match gallery::update(message) {
        gallery::Event::OpenViewer(id) => {
            app.viewer = Some(viewer::State::open(id));
            Task::none()
        }
        gallery::Event::Back => {
            app.screen = Screen::Results;
            Task::none()
        }
    }
}

fn handle_viewer_message(app: &mut App, message: viewer::Message) -> Task<Message> {
    let Some(viewer_state) = app.viewer.as_mut() else {
        return Task::none();
    };

    if viewer_state.handle_message(message) == viewer::Effect::Close {
        app.viewer = None;
    }
    Task::none()
}

/// Tears the current session down and starts a fresh one over the same
/// catalog. Bumping the generation first cancels any transition still
/// scheduled against the old session.
fn restart_session(app: &mut App) -> Task<Message> {
    let Some(catalog) = app.catalog.as_ref() else {
        return Task::none();
    };
    let ids = catalog.ids();

    let generation = app.next_generation();
    app.quiz = Some(quiz::State::new(
        ids,
        SmallRng::from_entropy(),
        generation,
    ));
    app.results = None;
    app.viewer = None;
    app.screen = Screen::Quiz;
    Task::none()
}
