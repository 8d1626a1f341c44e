//! Error types for octoflow
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::auth::TwoFactorChannel;
use thiserror::Error;

/// The main error type for octoflow
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Validation Errors (raised before any network call)
    // ============================================================================
    #[error("Missing required argument: {argument}")]
    MissingArgument { argument: String },

    #[error("Argument '{argument}' must not be empty")]
    EmptyArgument { argument: String },

    // ============================================================================
    // Two-Factor Authentication Errors
    // ============================================================================
    #[error("Two-factor authentication code required (delivered via {channel})")]
    TwoFactorRequired { channel: TwoFactorChannel },

    #[error("Two-factor authentication code was rejected")]
    ChallengeFailed,

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a missing argument error
    pub fn missing_argument(argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            argument: argument.into(),
        }
    }

    /// Create an empty argument error
    pub fn empty_argument(argument: impl Into<String>) -> Self {
        Self::EmptyArgument {
            argument: argument.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this is a local validation error (missing or empty argument)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument { .. } | Error::EmptyArgument { .. }
        )
    }

    /// Check if this error signals that a two-factor code is needed
    pub fn is_two_factor_required(&self) -> bool {
        matches!(self, Error::TwoFactorRequired { .. })
    }

    /// Check if this error is retryable at the transport level
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for octoflow
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_argument("payload");
        assert_eq!(err.to_string(), "Missing required argument: payload");

        let err = Error::empty_argument("owner");
        assert_eq!(err.to_string(), "Argument 'owner' must not be empty");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::TwoFactorRequired {
            channel: TwoFactorChannel::Sms,
        };
        assert_eq!(
            err.to_string(),
            "Two-factor authentication code required (delivered via sms)"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_argument("a").is_validation());
        assert!(Error::empty_argument("a").is_validation());
        assert!(!Error::ChallengeFailed.is_validation());
        assert!(!Error::http_status(400, "").is_validation());
    }

    #[test]
    fn test_is_two_factor_required() {
        assert!(Error::TwoFactorRequired {
            channel: TwoFactorChannel::App
        }
        .is_two_factor_required());
        assert!(!Error::ChallengeFailed.is_two_factor_required());
        assert!(!Error::http_status(401, "").is_two_factor_required());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(401, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::ChallengeFailed.is_retryable());
        assert!(!Error::missing_argument("a").is_retryable());
    }
}
