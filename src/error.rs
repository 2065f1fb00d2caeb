// SPDX-License-Identifier: MPL-2.0
use crate::domain::Field;
use thiserror::Error;

/// Crate-wide error type.
///
/// Variants carry strings rather than source errors so the type stays
/// `Clone` and can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A call to the backend failed (transport, HTTP status or decoding).
    #[error("Remote call failed: {0}")]
    Remote(String),

    /// A required form field is missing or malformed.
    #[error("Invalid field: {0:?}")]
    Validation(Field),

    /// A mutation was attempted without a cached identity.
    #[error("No cached user identity")]
    SessionMissing,

    /// Local storage could not be read or written.
    #[error("Storage Error: {0}")]
    Storage(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(String),
}

impl Error {
    /// Returns the i18n key for a generic notification about this error.
    ///
    /// Views usually prefer an action-specific key ("failed to join") and
    /// only fall back to this one.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Remote(_) => "notification-remote-error",
            Error::Validation(field) => field.i18n_key(),
            Error::SessionMissing => "notification-login-required",
            Error::Storage(_) => "notification-storage-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Io(_) => "notification-io-error",
        }
    }

    /// Whether the error should redirect to onboarding instead of being shown.
    #[must_use]
    pub fn is_session_missing(&self) -> bool {
        matches!(self, Error::SessionMissing)
    }
}

impl From<Field> for Error {
    fn from(field: Field) -> Self {
        Error::Validation(field)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Remote(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Remote(format!("unexpected response shape: {err}"))
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
