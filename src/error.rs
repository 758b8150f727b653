use std::result;

use crate::document::NodeKind;
use crate::retry::RetryableError;
use thiserror::Error;

/// Error types for stub generation
#[derive(Error, Debug)]
pub enum StubError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Source returned a non-success HTTP status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The document does not contain exactly one list of lists
    #[error("Expected exactly 1 list of lists in the document, found {found}")]
    StructuralCardinality { found: usize },

    /// A list whose first child is not a list item
    #[error("First child of a list was {found}, expected a list item")]
    MalformedList { found: String },

    /// A nested list item that is not a paragraph holding a single text link
    #[error("List item #{index} is not Paragraph > Link > RawText (found {found})")]
    ShapeMismatch { index: usize, found: String },

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },

    /// Invalid client or render configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StubError {
    pub(crate) fn malformed_list(found: Option<NodeKind>) -> Self {
        StubError::MalformedList {
            found: found.map_or_else(|| "nothing".to_string(), |kind| kind.to_string()),
        }
    }
}

impl From<std::io::Error> for StubError {
    fn from(err: std::io::Error) -> Self {
        StubError::IoError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = result::Result<T, StubError>;

impl RetryableError for StubError {
    fn is_retryable(&self) -> bool {
        match self {
            StubError::RequestError(err) => {
                if err.is_timeout() || err.is_connect() {
                    return true;
                }

                // Check for server errors (5xx)
                if let Some(status) = err.status() {
                    return status.is_server_error() || status.as_u16() == 429;
                }

                // DNS and other network errors
                !err.is_builder() && !err.is_redirect() && !err.is_decode()
            }

            // Server errors (5xx) and rate limiting (429) are retryable
            StubError::ApiError { status, .. } => (500..600).contains(status) || *status == 429,

            // Structural failures are deterministic for a given document
            StubError::StructuralCardinality { .. }
            | StubError::MalformedList { .. }
            | StubError::ShapeMismatch { .. }
            | StubError::IoError { .. }
            | StubError::InvalidConfig(_) => false,
        }
    }

    fn retry_reason(&self) -> &str {
        if self.is_retryable() {
            match self {
                StubError::RequestError(err) if err.is_timeout() => "Request timeout",
                StubError::RequestError(err) if err.is_connect() => "Connection error",
                StubError::RequestError(_) => "Network error",
                StubError::ApiError { status, .. } => match status {
                    429 => "Rate limit exceeded",
                    _ => "Server error",
                },
                _ => "Transient error",
            }
        } else {
            match self {
                StubError::StructuralCardinality { .. }
                | StubError::MalformedList { .. }
                | StubError::ShapeMismatch { .. } => "Unexpected document structure",
                StubError::ApiError { .. } => "Client error",
                StubError::IoError { .. } => "File system error",
                StubError::InvalidConfig(_) => "Invalid configuration",
                _ => "Non-transient error",
            }
        }
    }
}
