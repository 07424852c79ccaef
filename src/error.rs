//! Error types for Videoscribe.

use axum::http::StatusCode;
use thiserror::Error;

/// Detail returned whenever a video has no usable transcript.
pub const NO_TRANSCRIPT_DETAIL: &str = "No transcript available";

/// Library-level error type for Videoscribe operations.
#[derive(Error, Debug)]
pub enum VideoscribeError {
    /// Caller input was missing or invalid. The message is shown to the caller as-is.
    #[error("{0}")]
    InvalidInput(String),

    /// Transcripts are disabled or absent for the requested video.
    #[error("No transcript available for video {0}")]
    NotFound(String),

    /// Any other failure from an external dependency, carrying its text verbatim.
    #[error("{0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl VideoscribeError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            VideoscribeError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            VideoscribeError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text exposed to callers in the `detail` (HTTP) or `error` (CLI) field.
    pub fn detail(&self) -> String {
        match self {
            VideoscribeError::NotFound(_) => NO_TRANSCRIPT_DETAIL.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for Videoscribe operations.
pub type Result<T> = std::result::Result<T, VideoscribeError>;
