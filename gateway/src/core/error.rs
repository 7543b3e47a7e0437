//! # Gateway Error Types
//!
//! Consolidated error handling for the data-access gateway.
//!
//! Errors are classified by their **origin**, not by the library that produced
//! them, so page code can decide what to show without inspecting transport
//! internals:
//!
//! - **Transport / Timeout**: the request never got an HTTP answer
//! - **Unauthorized**: HTTP 401; the session has already been torn down when
//!   the caller sees this
//! - **NotFound / Client**: other 4xx answers
//! - **Server**: 5xx answers
//! - **Decode**: the body did not match the typed contract
//! - **Validation**: input rejected before anything was sent
//! - **Session / Config**: local failures (session storage, configuration)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use gateway::core::error::GatewayError;
//!
//! fn describe(err: &GatewayError) -> &'static str {
//!     match err {
//!         GatewayError::Unauthorized { .. } => "Session expired, please sign in again",
//!         GatewayError::NotFound { .. } => "Not found",
//!         GatewayError::Timeout => "The server took too long to answer",
//!         _ => "Unexpected error",
//!     }
//! }
//! ```

use thiserror::Error;

/// Gateway-wide error type.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network failure before any HTTP response (refused, DNS, reset).
    #[error("Network error: {0}")]
    Transport(String),

    /// The request exceeded the configured global timeout.
    #[error("Request timed out")]
    Timeout,

    /// HTTP 401. The persisted session was cleared and an
    /// [`Invalidated`](crate::session::SessionEvent::Invalidated) event emitted
    /// before this error was returned. If clearing failed, `message` ends
    /// with the storage error.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// HTTP 404.
    #[error("Not found: {path} ({message})")]
    NotFound { path: String, message: String },

    /// Any other 4xx answer (validation, conflict, forbidden...).
    #[error("Request rejected ({status}): {message}")]
    Client { status: u16, message: String },

    /// 5xx answer.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input rejected locally; nothing was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session storage could not be read or written.
    #[error("Session storage error: {0}")]
    Session(String),

    /// Invalid gateway configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// HTTP status carried by the error, if it came from an HTTP answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Unauthorized { .. } => Some(401),
            GatewayError::NotFound { .. } => Some(404),
            GatewayError::Client { status, .. } | GatewayError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Unauthorized { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }

    /// Build the error for a non-success HTTP status.
    pub(crate) fn from_status(status: reqwest::StatusCode, path: &str, message: String) -> Self {
        let code = status.as_u16();
        match code {
            401 => GatewayError::Unauthorized { message },
            404 => GatewayError::NotFound {
                path: path.to_string(),
                message,
            },
            400..=499 => GatewayError::Client { status: code, message },
            _ => GatewayError::Server { status: code, message },
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}
