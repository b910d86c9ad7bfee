// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (quiz session, catalog,
//! localization, theming) and translates component effects into navigation
//! and scheduled work. Policy decisions (window sizing, photo directory
//! resolution, session restarts) stay close to the main update loop so it is
//! easy to audit user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::config::{self, Config, DEFAULT_PHOTO_DIR};
use crate::error::{CatalogError, Error};
use crate::i18n::I18n;
use crate::media::PhotoCache;
use crate::ui::theming::ThemeMode;
use crate::ui::{quiz, results, viewer};
use iced::{window, Element, Subscription, Task, Theme};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state that bridges the screens, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: Option<Catalog>,
    catalog_error: Option<CatalogError>,
    photos: PhotoCache,
    quiz: Option<quiz::State>,
    results: Option<results::State>,
    viewer: Option<viewer::State>,
    theme_mode: ThemeMode,
    /// Monotone token handed to delayed transitions; bumping it on restart
    /// cancels everything still in flight.
    generation: u64,
    /// Warning key surfaced when the settings file had to be ignored.
    config_warning: Option<&'static str>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("catalog_len", &self.catalog.as_ref().map(Catalog::len))
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Quiz,
            catalog: None,
            catalog_error: None,
            photos: PhotoCache::new(),
            quiz: None,
            results: None,
            viewer: None,
            theme_mode: ThemeMode::System,
            generation: 0,
            config_warning: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: configuration, localization, catalog
    /// scan, first session, and the batch of photo decode tasks.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let photo_dir = resolve_photo_dir(&flags, &config);

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            config_warning,
            ..Self::default()
        };

        match Catalog::scan(&photo_dir) {
            Ok(catalog) => {
                let load_task = update::spawn_photo_loads(&catalog);
                app.quiz = Some(quiz::State::new(
                    catalog.ids(),
                    SmallRng::from_entropy(),
                    app.generation,
                ));
                app.catalog = Some(catalog);
                (app, load_task)
            }
            Err(error) => {
                app.catalog_error = Some(match error {
                    Error::Catalog(catalog_error) => catalog_error,
                    other => CatalogError::Unreadable {
                        path: photo_dir.display().to_string(),
                        reason: other.to_string(),
                    },
                });
                (app, Task::none())
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Advances the transition token, invalidating every delayed message
    /// scheduled before the call.
    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

/// Photo directory precedence: CLI argument, then config, then `photos/`
/// next to the working directory.
fn resolve_photo_dir(flags: &Flags, config: &Config) -> PathBuf {
    flags
        .photo_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.photo_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PHOTO_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_photo_dir_wins_over_config() {
        let flags = Flags {
            lang: None,
            photo_dir: Some("/from/cli".into()),
        };
        let config = Config {
            photo_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        assert_eq!(resolve_photo_dir(&flags, &config), PathBuf::from("/from/cli"));
    }

    #[test]
    fn config_photo_dir_wins_over_default() {
        let flags = Flags::default();
        let config = Config {
            photo_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        assert_eq!(
            resolve_photo_dir(&flags, &config),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn default_photo_dir_is_the_fallback() {
        let flags = Flags::default();
        let config = Config::default();
        assert_eq!(
            resolve_photo_dir(&flags, &config),
            PathBuf::from(DEFAULT_PHOTO_DIR)
        );
    }
}
