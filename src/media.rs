// SPDX-License-Identifier: MPL-2.0
//! Photo loading, the obscured final-step variant, and the decoded cache.

use crate::catalog::PhotoId;
use crate::config::{OBSCURED_BLUR_SIGMA, OBSCURED_PREVIEW_EDGE, PHOTO_CACHE_CAPACITY};
use crate::error::Result;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;

/// A decoded catalog photo, ready for the widget tree.
#[derive(Debug, Clone)]
pub struct PhotoData {
    /// Full-resolution handle.
    pub handle: image::Handle,
    /// Heavily blurred low-resolution variant for the obscured final step.
    pub obscured: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Decodes a photo from disk into display and obscured handles.
///
/// The obscured variant is downscaled before blurring; at the sizes involved
/// the widget's upscaling hides the resolution loss and the blur cost stays
/// negligible next to the decode itself.
pub fn load_photo(path: &Path) -> Result<PhotoData> {
    let bytes = std::fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes)?;

    let width = decoded.width();
    let height = decoded.height();

    let rgba = decoded.to_rgba8();
    let handle = image::Handle::from_rgba(width, height, rgba.into_raw());

    let obscured_image = decoded
        .thumbnail(OBSCURED_PREVIEW_EDGE, OBSCURED_PREVIEW_EDGE)
        .blur(OBSCURED_BLUR_SIGMA);
    let obscured_width = obscured_image.width();
    let obscured_height = obscured_image.height();
    let obscured = image::Handle::from_rgba(
        obscured_width,
        obscured_height,
        obscured_image.to_rgba8().into_raw(),
    );

    Ok(PhotoData {
        handle,
        obscured,
        width,
        height,
    })
}

/// Load status of one catalog photo, for rendering.
#[derive(Debug, Clone, Copy)]
pub enum PhotoStatus<'a> {
    /// Decode task has not delivered yet.
    Loading,
    /// Decoded and cached.
    Ready(&'a PhotoData),
    /// Decode failed; the placeholder stays up.
    Failed,
}

/// Bounded cache of decoded photos keyed by catalog identifier.
///
/// The catalog fits comfortably inside the capacity; the LRU bound is there
/// so a future, larger catalog degrades by re-decoding instead of growing
/// without limit.
#[derive(Debug)]
pub struct PhotoCache {
    loaded: LruCache<PhotoId, PhotoData>,
    failed: std::collections::HashSet<PhotoId>,
}

impl Default for PhotoCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoCache {
    const CAPACITY: NonZeroUsize = match NonZeroUsize::new(PHOTO_CACHE_CAPACITY) {
        Some(capacity) => capacity,
        None => panic!("photo cache capacity must be non-zero"),
    };

    #[must_use]
    pub fn new() -> Self {
        Self {
            loaded: LruCache::new(Self::CAPACITY),
            failed: std::collections::HashSet::new(),
        }
    }

    /// Stores a decoded photo, clearing any earlier failure mark.
    pub fn insert(&mut self, id: PhotoId, data: PhotoData) {
        self.failed.remove(&id);
        self.loaded.put(id, data);
    }

    /// Marks a photo as failed so views can stop waiting for it.
    pub fn mark_failed(&mut self, id: PhotoId) {
        self.failed.insert(id);
    }

    /// Looks up a photo without disturbing the recency order; views call
    /// this every frame.
    pub fn status(&self, id: &PhotoId) -> PhotoStatus<'_> {
        if let Some(data) = self.loaded.peek(id) {
            PhotoStatus::Ready(data)
        } else if self.failed.contains(id) {
            PhotoStatus::Failed
        } else {
            PhotoStatus::Loading
        }
    }

    /// Looks up a photo and refreshes its recency.
    pub fn get(&mut self, id: &PhotoId) -> Option<&PhotoData> {
        self.loaded.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
