// SPDX-License-Identifier: MPL-2.0
//! Photo catalog built by scanning a directory for supported image files.
//!
//! The scanner filters by extension, sorts by file name for a stable order,
//! and keeps the first [`CATALOG_SIZE`](crate::config::CATALOG_SIZE) photos.
//! A directory with fewer usable photos than a session needs is a typed
//! startup error, not a silently shortened session.

use crate::config::CATALOG_SIZE;
use crate::error::{CatalogError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier of one catalog photo: its file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One discovered photo: identifier plus its on-disk location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPhoto {
    pub id: PhotoId,
    pub path: PathBuf,
}

/// The fixed set of photos one session plays over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    photos: Vec<CatalogPhoto>,
}

impl Catalog {
    /// Scans `directory` for supported photos and builds the catalog.
    ///
    /// Files are sorted by name so the catalog order is stable across runs;
    /// shuffling happens per session, not here.
    pub fn scan(directory: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(directory).map_err(|err| CatalogError::Unreadable {
            path: directory.display().to_string(),
            reason: err.to_string(),
        })?;

        let mut photos = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| CatalogError::Unreadable {
                path: directory.display().to_string(),
                reason: err.to_string(),
            })?;
            let path = entry.path();

            if path.is_file() && is_supported_photo(&path) {
                if let Some(name) = path.file_name() {
                    photos.push(CatalogPhoto {
                        id: PhotoId::new(name.to_string_lossy().into_owned()),
                        path: path.clone(),
                    });
                }
            }
        }

        photos.sort_by(|a, b| a.id.cmp(&b.id));

        if photos.len() < CATALOG_SIZE {
            return Err(CatalogError::NotEnoughPhotos {
                path: directory.display().to_string(),
                found: photos.len(),
                required: CATALOG_SIZE,
            }
            .into());
        }
        photos.truncate(CATALOG_SIZE);

        Ok(Self { photos })
    }

    /// Returns the catalog photos in their stable display order.
    pub fn photos(&self) -> &[CatalogPhoto] {
        &self.photos
    }

    /// Returns the catalog identifiers in their stable display order.
    #[must_use]
    pub fn ids(&self) -> Vec<PhotoId> {
        self.photos.iter().map(|photo| photo.id.clone()).collect()
    }

    /// Looks up the on-disk path of a catalog photo.
    pub fn path_of(&self, id: &PhotoId) -> Option<&Path> {
        self.photos
            .iter()
            .find(|photo| &photo.id == id)
            .map(|photo| photo.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Checks whether a path looks like a photo the decoder can handle.
fn is_supported_photo(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(
            ext.to_ascii_lowercase().as_str(),
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp"
        ),
        None => false,
    }
}
