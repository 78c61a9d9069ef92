// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Http(String),
    Content(ContentError),
    Config(String),
}

/// Specific error types for content fetching issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// The CMS could not be reached (connection refused, DNS, timeout).
    Unreachable(String),

    /// The CMS answered with a non-success HTTP status.
    BadStatus(u16),

    /// The response body did not match the expected Strapi envelope.
    MalformedPayload(String),

    /// A wallpaper entry is missing a usable image URL.
    MissingImageUrl(String),

    /// Generic error with raw message.
    Other(String),
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::Unreachable(_) => "error-content-unreachable",
            ContentError::BadStatus(_) => "error-content-bad-status",
            ContentError::MalformedPayload(_) => "error-content-malformed",
            ContentError::MissingImageUrl(_) => "error-content-missing-url",
            ContentError::Other(_) => "error-content-general",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Unreachable(msg) => write!(f, "CMS unreachable: {}", msg),
            ContentError::BadStatus(status) => write!(f, "CMS returned HTTP {}", status),
            ContentError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            ContentError::MissingImageUrl(name) => {
                write!(f, "Wallpaper '{}' has no image URL", name)
            }
            ContentError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::Content(ContentError::Unreachable(err.to_string()))
        } else if err.is_decode() {
            Error::Content(ContentError::MalformedPayload(err.to_string()))
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Content(ContentError::MalformedPayload(err.to_string()))
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
