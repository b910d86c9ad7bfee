// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Catalog(CatalogError),
    Session(SessionError),
}

/// Errors raised while building the photo catalog at startup.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The photo directory could not be read at all.
    Unreadable { path: String, reason: String },

    /// The directory was readable but held fewer photos than a session needs.
    NotEnoughPhotos {
        path: String,
        found: usize,
        required: usize,
    },
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Unreadable { .. } => "error-catalog-unreadable",
            CatalogError::NotEnoughPhotos { .. } => "error-catalog-not-enough",
        }
    }

    /// Returns the scanned directory path for display next to the message.
    pub fn path(&self) -> &str {
        match self {
            CatalogError::Unreadable { path, .. }
            | CatalogError::NotEnoughPhotos { path, .. } => path,
        }
    }
}

/// Errors raised by the quiz session state machine.
///
/// Both variants guard gaps the original behavior left open: choosing an
/// identifier that was never presented, and drawing a pair from a pool that
/// cannot supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `choose` was called with an identifier outside the presented pair.
    ChoiceNotPresented,

    /// `present_choices` was called with fewer pool items than options shown.
    PoolExhausted { remaining: usize },
}

impl SessionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SessionError::ChoiceNotPresented => "error-session-choice-not-presented",
            SessionError::PoolExhausted { .. } => "error-session-pool-exhausted",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unreadable { path, reason } => {
                write!(f, "Cannot read photo directory {}: {}", path, reason)
            }
            CatalogError::NotEnoughPhotos {
                path,
                found,
                required,
            } => write!(
                f,
                "Photo directory {} holds {} photos, {} required",
                path, found, required
            ),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::ChoiceNotPresented => {
                write!(f, "Chosen photo is not part of the presented pair")
            }
            SessionError::PoolExhausted { remaining } => {
                write!(f, "Pool has {} photos left, cannot present a pair", remaining)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Session(e) => write!(f, "Session Error: {}", e),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Error::Session(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn session_error_i18n_keys() {
        assert_eq!(
            SessionError::ChoiceNotPresented.i18n_key(),
            "error-session-choice-not-presented"
        );
        assert_eq!(
            SessionError::PoolExhausted { remaining: 1 }.i18n_key(),
            "error-session-pool-exhausted"
        );
    }

    #[test]
    fn catalog_error_reports_path() {
        let err = CatalogError::NotEnoughPhotos {
            path: "./photos".into(),
            found: 3,
            required: 12,
        };
        assert_eq!(err.path(), "./photos");
        assert!(format!("{}", err).contains("3 photos"));
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::Unreadable {
            path: "/nowhere".into(),
            reason: "denied".into(),
        }
        .into();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn session_error_display_mentions_pair() {
        let err = SessionError::ChoiceNotPresented;
        assert!(format!("{}", err).contains("presented pair"));
    }
}
