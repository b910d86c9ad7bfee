// SPDX-License-Identifier: MPL-2.0
//! `keepsake` is a photo quiz and gallery application built with the Iced
//! GUI framework.
//!
//! A session asks six forced-choice questions over a pool of twelve photos,
//! then shows the picks in a results gallery with a zoomable viewer. The
//! crate demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod quiz;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
