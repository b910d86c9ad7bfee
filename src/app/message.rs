// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::PhotoId;
use crate::error::Error;
use crate::media::PhotoData;
use crate::ui::gallery;
use crate::ui::quiz;
use crate::ui::results;
use crate::ui::viewer;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Quiz(quiz::Message),
    Results(results::Message),
    Gallery(gallery::Message),
    Viewer(viewer::Message),
    /// Result from decoding a catalog photo in the background.
    PhotoLoaded {
        id: PhotoId,
        result: Result<PhotoData, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo directory to scan instead of the configured one.
    pub photo_dir: Option<String>,
}
