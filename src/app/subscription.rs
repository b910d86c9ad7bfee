// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, wheel, touch) to the modal
//! photo viewer while it is open. No other screen consumes raw events:
//! wheel input belongs to the gallery's scrollable and keyboard input to
//! focused widgets.

use super::{App, Message};
use crate::ui::viewer;
use iced::{event, Subscription};

/// Creates the event subscription for the current application state.
pub(super) fn subscription(app: &App) -> Subscription<Message> {
    if app.viewer.is_some() {
        event::listen_with(route_viewer_event)
    } else {
        Subscription::none()
    }
}

/// Routes wheel and touch events to the viewer unconditionally (they drive
/// the zoom even over other widgets) and keyboard events only when nothing
/// else captured them.
fn route_viewer_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match &event {
        event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
        | event::Event::Touch(_) => {
            Some(Message::Viewer(viewer::Message::RawEvent(event.clone())))
        }
        event::Event::Keyboard(_) => match status {
            event::Status::Ignored => {
                Some(Message::Viewer(viewer::Message::RawEvent(event.clone())))
            }
            event::Status::Captured => None,
        },
        _ => None,
    }
}
