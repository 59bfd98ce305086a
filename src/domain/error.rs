use std::io;

use thiserror::Error;

/// Library-wide error type for dexter operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Upstream request failed: network error or non-2xx status.
    #[error("Failed to fetch from the Pokémon API: {message}")]
    FetchFailed {
        message: String,
        /// HTTP status when the upstream answered at all.
        status: Option<u16>,
    },

    /// The detail endpoint returned 404 for the requested name.
    #[error("Pokémon '{0}' not found")]
    NotFound(String),

    /// A catalogue source reference does not carry an identifier segment.
    #[error("Invalid source reference '{0}': expected a slash-delimited URL ending in '<id>/'")]
    InvalidReference(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn fetch_failed<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::FetchFailed { message: message.into(), status }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidReference(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::NotFound(_) => io::ErrorKind::NotFound,
            AppError::FetchFailed { .. } => io::ErrorKind::Other,
        }
    }
}
