use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload carried next to the message, e.g. `{"field": "limit"}`.
pub type ErrorDetails = serde_json::Value;

/// Result type returned by every use-case operation.
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Closed set of use-case failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseErrorKind {
    /// Caller-supplied data violates a precondition.
    BadInput,
    /// Referenced resource does not exist.
    NotFound,
    /// Caller lacks permission.
    Unauthorized,
}

impl UseCaseErrorKind {
    /// Transport status a boundary layer should answer with.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    /// Stable machine-readable code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::BadInput => "BAD_INPUT",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::BadInput => "Bad Request",
            Self::NotFound => "Not Found",
            Self::Unauthorized => "Unauthorized",
        }
    }
}

/// Use-case level failure: a kind, a human-readable message and optional details.
///
/// Serializes as `{"kind": "not_found", "message": "...", "details": ...}`,
/// omitting `details` when absent.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UseCaseError {
    #[error("{message}")]
    BadInput {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<ErrorDetails>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<ErrorDetails>,
    },

    #[error("{message}")]
    Unauthorized {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<ErrorDetails>,
    },
}

impl UseCaseError {
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput {
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_input_with_details(message: impl Into<String>, details: ErrorDetails) -> Self {
        Self::BadInput {
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found_with_details(message: impl Into<String>, details: ErrorDetails) -> Self {
        Self::NotFound {
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized_with_details(message: impl Into<String>, details: ErrorDetails) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details: Some(details),
        }
    }

    /// Attach (or replace) the details payload.
    pub fn with_details(mut self, value: ErrorDetails) -> Self {
        match &mut self {
            Self::BadInput { details, .. }
            | Self::NotFound { details, .. }
            | Self::Unauthorized { details, .. } => *details = Some(value),
        }
        self
    }

    pub fn kind(&self) -> UseCaseErrorKind {
        match self {
            Self::BadInput { .. } => UseCaseErrorKind::BadInput,
            Self::NotFound { .. } => UseCaseErrorKind::NotFound,
            Self::Unauthorized { .. } => UseCaseErrorKind::Unauthorized,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadInput { message, .. }
            | Self::NotFound { message, .. }
            | Self::Unauthorized { message, .. } => message,
        }
    }

    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::BadInput { details, .. }
            | Self::NotFound { details, .. }
            | Self::Unauthorized { details, .. } => details.as_ref(),
        }
    }

    /// Consume the error into the parts a boundary layer reads.
    pub fn into_parts(self) -> (UseCaseErrorKind, String, Option<ErrorDetails>) {
        let kind = self.kind();
        match self {
            Self::BadInput { message, details }
            | Self::NotFound { message, details }
            | Self::Unauthorized { message, details } => (kind, message, details),
        }
    }
}
