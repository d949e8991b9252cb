use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("missing credential: environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("model {model} is unavailable")]
    UpstreamUnavailable { model: String },

    #[error("model endpoint rejected the credential (HTTP {status})")]
    UpstreamAuth { status: u16 },

    #[error("no model returned valid name data")]
    UpstreamFormat,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Categories of failure that may cross the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    UpstreamUnavailable,
    UpstreamAuth,
    UpstreamFormat,
    Transport,
}

impl Error {
    /// Classify this error into a caller-facing category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Validation(_) => ErrorKind::Validation,
            Self::UpstreamUnavailable { .. } => ErrorKind::UpstreamUnavailable,
            Self::UpstreamAuth { .. } => ErrorKind::UpstreamAuth,
            Self::UpstreamFormat => ErrorKind::UpstreamFormat,
            Self::Transport(_) | Self::Json(_) => ErrorKind::Transport,
        }
    }

    /// Message safe to show an end user.
    ///
    /// Configuration and validation errors are surfaced verbatim; upstream
    /// failures collapse to fixed wording so that neither model output nor
    /// transport internals leak through.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Configuration | ErrorKind::Validation => self.to_string(),
            ErrorKind::UpstreamUnavailable => {
                "The AI model is loading. Please wait a moment and try again.".into()
            }
            ErrorKind::UpstreamAuth => {
                "The AI service rejected the configured API token.".into()
            }
            ErrorKind::UpstreamFormat => {
                "Could not parse name suggestions. Please try again.".into()
            }
            ErrorKind::Transport => "Failed to reach the AI service. Please try again.".into(),
        }
    }
}
