// SPDX-License-Identifier: MPL-2.0
//! Modal photo viewer with wheel and pinch zoom.
//!
//! The viewer floats above the gallery. Opening a photo always starts at
//! identity scale; raw window events routed in while the viewer is open
//! drive the zoom, and Escape, the close button, or a backdrop press close
//! it.

use crate::catalog::PhotoId;
use crate::config::VIEWER_BASE_EDGE;
use crate::i18n::I18n;
use crate::media::{PhotoCache, PhotoStatus};
use crate::ui::components::placeholder;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::{PinchTracker, ZoomState};
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{keyboard, mouse, touch, Alignment, Element, Event, Length};

/// Messages emitted by (or routed into) the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button, backdrop press, or Escape.
    CloseRequested,
    /// Raw window event routed in while the viewer is open.
    RawEvent(Event),
}

/// Side effects the application should perform after handling a viewer
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Close,
}

/// Complete viewer state.
#[derive(Debug)]
pub struct State {
    photo: PhotoId,
    zoom: ZoomState,
    pinch: PinchTracker,
}

impl State {
    /// Opens the viewer on a photo at identity scale.
    #[must_use]
    pub fn open(photo: PhotoId) -> Self {
        let mut zoom = ZoomState::default();
        zoom.reset();
        Self {
            photo,
            zoom,
            pinch: PinchTracker::new(),
        }
    }

    pub fn photo(&self) -> &PhotoId {
        &self.photo
    }

    /// Current zoom scale factor.
    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        self.zoom.scale()
    }

    /// Processes a viewer message and reports whether the viewer should
    /// close.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::CloseRequested => Effect::Close,
            Message::RawEvent(event) => self.handle_raw_event(&event),
        }
    }

    fn handle_raw_event(&mut self, event: &Event) -> Effect {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Effect::Close,
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => {
                        *y
                    }
                };
                if y != 0.0 {
                    self.zoom.handle_wheel(y);
                }
                Effect::None
            }
            Event::Touch(touch_event) => {
                self.handle_touch(*touch_event);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_touch(&mut self, event: touch::Event) {
        match event {
            touch::Event::FingerPressed { id, position } => self.pinch.press(id, position),
            touch::Event::FingerMoved { id, position } => {
                if let Some(delta) = self.pinch.moved(id, position) {
                    self.zoom.apply_delta(delta);
                }
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.pinch.release(id);
            }
        }
    }

    /// Renders the viewer card (the backdrop is composed by the app view).
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let close = button(text(ctx.i18n.tr("viewer-close-button")).size(typography::BODY))
            .on_press(Message::CloseRequested)
            .style(styles::button::viewer_close)
            .padding(spacing::XS);

        let header = row![Space::new().width(Length::Fill), close];

        let photo: Element<'a, Message> = match ctx.photos.status(&self.photo) {
            PhotoStatus::Ready(data) => {
                let longest_edge = data.width.max(data.height).max(1) as f32;
                let fit = VIEWER_BASE_EDGE / longest_edge;
                let scale = fit * self.zoom.scale();
                image(data.handle.clone())
                    .width(Length::Fixed(data.width as f32 * scale))
                    .height(Length::Fixed(data.height as f32 * scale))
                    .into()
            }
            PhotoStatus::Loading => {
                placeholder::loading_tile(ctx.i18n, VIEWER_BASE_EDGE, VIEWER_BASE_EDGE)
            }
            PhotoStatus::Failed => {
                placeholder::failed_tile(ctx.i18n, VIEWER_BASE_EDGE, VIEWER_BASE_EDGE)
            }
        };

        container(
            column![header, photo]
                .spacing(spacing::SM)
                .align_x(Alignment::Center),
        )
        .padding(spacing::MD)
        .style(styles::container::viewer_card)
        .into()
    }
}

/// Environment information required to render the viewer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photos: &'a PhotoCache,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_ZOOM_SCALE, PINCH_ZOOM_FACTOR};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::touch::Finger;
    use iced::Point;

    fn wheel(y: f32) -> Message {
        Message::RawEvent(Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y },
        }))
    }

    #[test]
    fn open_starts_at_identity_scale() {
        let state = State::open(PhotoId::new("photo.jpeg"));
        assert_abs_diff_eq!(state.zoom_scale(), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn wheel_up_zooms_in_by_one_step() {
        let mut state = State::open(PhotoId::new("photo.jpeg"));
        assert_eq!(state.handle_message(wheel(1.0)), Effect::None);
        assert_abs_diff_eq!(state.zoom_scale(), 1.1, epsilon = F32_EPSILON);
    }

    #[test]
    fn wheel_storm_stays_clamped() {
        let mut state = State::open(PhotoId::new("photo.jpeg"));
        for _ in 0..100 {
            state.handle_message(wheel(1.0));
        }
        assert_abs_diff_eq!(state.zoom_scale(), MAX_ZOOM_SCALE, epsilon = F32_EPSILON);
    }

    #[test]
    fn pinch_spread_zooms_in() {
        let mut state = State::open(PhotoId::new("photo.jpeg"));

        let press = |id: u64, x: f32| {
            Message::RawEvent(Event::Touch(touch::Event::FingerPressed {
                id: Finger(id),
                position: Point::new(x, 0.0),
            }))
        };
        let moved = |id: u64, x: f32| {
            Message::RawEvent(Event::Touch(touch::Event::FingerMoved {
                id: Finger(id),
                position: Point::new(x, 0.0),
            }))
        };

        state.handle_message(press(1, 0.0));
        state.handle_message(press(2, 100.0));
        state.handle_message(moved(2, 160.0));

        assert_abs_diff_eq!(
            state.zoom_scale(),
            1.0 + 60.0 * PINCH_ZOOM_FACTOR,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn reopening_resets_the_scale() {
        let mut state = State::open(PhotoId::new("photo.jpeg"));
        state.handle_message(wheel(1.0));
        state.handle_message(wheel(1.0));

        let state = State::open(PhotoId::new("other.jpeg"));
        assert_abs_diff_eq!(state.zoom_scale(), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn close_request_reports_close_effect() {
        let mut state = State::open(PhotoId::new("photo.jpeg"));
        assert_eq!(state.handle_message(Message::CloseRequested), Effect::Close);
    }
}
