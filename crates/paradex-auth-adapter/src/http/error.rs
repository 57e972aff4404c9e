/*
[INPUT]:  Error sources (HTTP, remote API, signing, serialization)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing remote classification
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ApiErrorBody;

/// Main error type for the Paradex auth adapter
#[derive(Error, Debug)]
pub enum ParadexError {
    /// Private key or account address is not a valid Stark scalar
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// Typed-data signing primitive failed
    #[error("signing failed: {0}")]
    Signing(String),

    /// Chain config could not be fetched or decoded
    #[error("system config unavailable: {0}")]
    ConfigUnavailable(String),

    /// Remote endpoint rejected the request; message is the remote error verbatim
    #[error("remote rejected request (status {status}): {message}")]
    RemoteRejected { status: u16, message: String },

    /// Account is not onboarded; caller should restart the flow from onboarding
    #[error("account is not onboarded")]
    NeedsOnboarding,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not match the expected schema
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ParadexError {
    /// Build a `RemoteRejected` from a non-success response.
    ///
    /// The error body is parsed here, exactly once; callers classify via the
    /// predicates below instead of re-reading the body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or_else(|| body.to_string());
        ParadexError::RemoteRejected {
            status: status.as_u16(),
            message,
        }
    }

    /// Cryptographic failure; retrying with the same key cannot succeed
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParadexError::InvalidKey(_) | ParadexError::Signing(_))
    }

    /// Check if the error is worth retrying at the caller's discretion
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ParadexError::Http(_) | ParadexError::ConfigUnavailable(_)
        )
    }

    /// Rejection that means the account is already registered (idempotent case)
    pub fn is_already_onboarded(&self) -> bool {
        match self {
            ParadexError::RemoteRejected { status, message } => {
                *status == 409 || message.to_ascii_lowercase().contains("already")
            }
            _ => false,
        }
    }

    /// Rejection that means the account was never onboarded
    pub fn is_not_onboarded(&self) -> bool {
        match self {
            ParadexError::RemoteRejected { message, .. } => {
                let message = message.to_ascii_lowercase();
                message.contains("not_onboarded")
                    || message.contains("not onboarded")
                    || message.contains("not found")
            }
            _ => false,
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, ParadexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_extracts_error_body() {
        let err = ParadexError::from_response(
            StatusCode::CONFLICT,
            r#"{"error":"ALREADY_ONBOARDED","message":"account already registered"}"#,
        );
        match err {
            ParadexError::RemoteRejected { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "ALREADY_ONBOARDED: account already registered");
            }
            other => panic!("expected RemoteRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_from_response_keeps_raw_body_when_not_json() {
        let err = ParadexError::from_response(StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            ParadexError::RemoteRejected { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected RemoteRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_already_onboarded_classification() {
        let conflict = ParadexError::from_response(StatusCode::CONFLICT, "");
        assert!(conflict.is_already_onboarded());

        let by_message = ParadexError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"account already exists"}"#,
        );
        assert!(by_message.is_already_onboarded());

        let other = ParadexError::from_response(StatusCode::BAD_REQUEST, "bad signature");
        assert!(!other.is_already_onboarded());
    }

    #[test]
    fn test_not_onboarded_classification() {
        let err = ParadexError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"NOT_ONBOARDED","message":"account not onboarded"}"#,
        );
        assert!(err.is_not_onboarded());
        assert!(!err.is_already_onboarded());

        let not_found =
            ParadexError::from_response(StatusCode::NOT_FOUND, r#"{"error":"account not found"}"#);
        assert!(not_found.is_not_onboarded());

        let unrelated = ParadexError::from_response(StatusCode::UNAUTHORIZED, "expired signature");
        assert!(!unrelated.is_not_onboarded());
    }

    #[test]
    fn test_fatal_errors_are_not_retryable() {
        let key_err = ParadexError::InvalidKey("bad scalar".to_string());
        assert!(key_err.is_fatal());
        assert!(!key_err.is_retryable());

        let config_err = ParadexError::ConfigUnavailable("timeout".to_string());
        assert!(!config_err.is_fatal());
        assert!(config_err.is_retryable());
    }
}
