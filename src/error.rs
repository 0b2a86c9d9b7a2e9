//! Unified SDK error types.

use thiserror::Error;

use crate::shared::{ResourceId, ResourceKind};

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: ResourceId },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl SdkError {
    /// True for an empty detail lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::NotFound { .. })
    }

    /// The upstream status code, when the failure was a non-2xx response.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            SdkError::Http(HttpError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Parse(err.to_string())
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request could not be sent or the body could not be read.
    #[cfg(feature = "http")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("Status {status}: {status_text}")]
    Status { status: u16, status_text: String },
}

/// Credential errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("Empty credential: {0}")]
    EmptyCredential(&'static str),

    /// `build()` was called without `.credentials(..)` or `from_env()`.
    #[error("No credentials configured on the client builder")]
    NoCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_only_for_status_errors() {
        let err = SdkError::Http(HttpError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        });
        assert_eq!(err.http_status(), Some(404));
        assert!(!err.is_not_found());

        let err = SdkError::Parse("eof".to_string());
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn test_not_found_display() {
        let err = SdkError::NotFound {
            kind: ResourceKind::Character,
            id: ResourceId::from("1009368"),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "character not found: 1009368");
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let err: SdkError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, SdkError::Parse(_)));
    }
}
