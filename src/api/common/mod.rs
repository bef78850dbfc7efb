//
//  booker-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common error types for the Booker API client
//!
//! Every fallible operation in the library returns [`BookerError`]. Each
//! failure kind has its own variant so calling code can branch on it:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `Authentication` | Token acquisition fails; no request is sent |
//! | `Transport` | Non-2xx status, a rejected or unreadable body, or a network failure |
//! | `Format` | A `/Date(..)/` string cannot be parsed |
//! | `Mapping` | A response body does not fit the declared model |
//! | `Config` | The client configuration is unusable |
//!
//! # Example
//!
//! ```rust
//! use booker_client::api::common::{BookerError, TransportError};
//!
//! fn describe(err: &BookerError) -> &'static str {
//!     match err {
//!         BookerError::Authentication(_) => "check the access token",
//!         BookerError::Transport(TransportError::Status { status: 404, .. }) => "no such resource",
//!         BookerError::Transport(_) => "the request did not go through",
//!         BookerError::Format(_) | BookerError::Mapping(_) => "unexpected response",
//!         BookerError::Config(_) => "fix the configuration",
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Nothing is retried; errors reach the caller as soon as they happen
//! - `reqwest::Error` converts into `TransportError::Network`

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all Booker API operations.
#[derive(Error, Debug)]
pub enum BookerError {
    /// The access token could not be obtained.
    ///
    /// Raised before any request is attempted.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A wire date did not match `/Date(<milliseconds>)/`.
    #[error("Invalid date format: {0}")]
    Format(String),

    /// The response body could not be coerced into the expected model.
    #[error("Unexpected response shape: {0}")]
    Mapping(String),

    /// The client configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for BookerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(err))
    }
}

impl BookerError {
    /// Returns the HTTP status for errors caused by a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Failures of the HTTP layer.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-success status.
    ///
    /// `message` holds the error text reported by Booker when the body
    /// carries one, otherwise the raw body.
    #[error("Booker API error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// The server answered 2xx but reported a failure in the body.
    #[error("Booker rejected the request{}: {message}", .code.map(|c| format!(" (code {c})")).unwrap_or_default())]
    Rejected {
        /// Booker `ErrorCode`, when present
        code: Option<i64>,
        /// Booker `ErrorMessage`
        message: String,
    },

    /// A success response whose body is not JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// Connection, timeout, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Builds a [`TransportError::Status`] from a failed response.
///
/// Booker reports failures as
/// ```json
/// {"IsSuccess": false, "ErrorCode": 1000, "ErrorMessage": "Human readable message"}
/// ```
/// while the gateway in front of it uses `{"message": "..."}` or
/// `{"error": "...", "error_description": "..."}`. The first message found
/// wins; otherwise the raw body is kept.
pub fn status_error(status: StatusCode, body: &str) -> TransportError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["ErrorMessage", "message", "error_description", "error"]
                .iter()
                .find_map(|key| json.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string());

    TransportError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_booker_message() {
        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"IsSuccess": false, "ErrorCode": 1000, "ErrorMessage": "Invalid LocationID"}"#,
        );
        match err {
            TransportError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid LocationID");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_error_reads_error_description() {
        let err = status_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error": "invalid_client", "error_description": "Unknown client"}"#,
        );
        assert!(err.to_string().contains("Unknown client"));
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        let err = status_error(StatusCode::BAD_GATEWAY, "upstream timed out\n");
        assert_eq!(err.to_string(), "Booker API error (502): upstream timed out");
    }

    #[test]
    fn status_is_exposed_only_for_http_failures() {
        let http: BookerError = status_error(StatusCode::NOT_FOUND, "").into();
        assert_eq!(http.status(), Some(404));
        assert_eq!(BookerError::Mapping("x".into()).status(), None);
    }
}
