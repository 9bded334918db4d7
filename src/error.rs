//! Error types for GitHub API operations.

use thiserror::Error;

/// Errors that can occur during GitHub API operations.
///
/// The status-derived variants (`BadRequest` through `ServiceUnavailable`)
/// map one-to-one onto the classified HTTP statuses and carry the message
/// reported by the server.
#[derive(Debug, Error)]
pub enum GithubError {
    /// A required input was absent or empty at the boundary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP 400.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// HTTP 401.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 403.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// HTTP 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// HTTP 406.
    #[error("not acceptable: {0}")]
    NotAcceptable(String),

    /// HTTP 500.
    #[error("internal server error: {0}")]
    InternalServerError(String),

    /// HTTP 502.
    #[error("bad gateway: {0}")]
    BadGateway(String),

    /// HTTP 503.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A network-level failure, or a non-2xx status outside the
    /// classification table.
    #[error("transport failure: {message}")]
    TransportFailure {
        /// The HTTP status, when one was received.
        status: Option<u16>,
        /// A description of the failure.
        message: String,
    },

    /// A 2xx response whose body could not be decoded into the expected
    /// shape.
    #[error("failed to decode response: {0}")]
    DecodeFailure(String),
}

impl GithubError {
    /// Classifies a non-2xx HTTP status into an error kind.
    ///
    /// Statuses outside the table become [`GithubError::TransportFailure`]
    /// carrying the status code.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => GithubError::BadRequest(message),
            401 => GithubError::Unauthorized(message),
            403 => GithubError::Forbidden(message),
            404 => GithubError::NotFound(message),
            406 => GithubError::NotAcceptable(message),
            500 => GithubError::InternalServerError(message),
            502 => GithubError::BadGateway(message),
            503 => GithubError::ServiceUnavailable(message),
            _ => GithubError::TransportFailure {
                status: Some(status),
                message,
            },
        }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        GithubError::TransportFailure {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Result type alias for GitHub operations.
pub type Result<T> = core::result::Result<T, GithubError>;
