//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The payload decoded but violates an invariant of the data model.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// Whether this error is an HTTP 404 from the API.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::Http(e) if e.is_not_found())
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport failure: the request never completed.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// A response arrived with a non-success status.
    #[error("{context}: {reason}")]
    RequestFailed {
        context: &'static str,
        status: u16,
        reason: String,
    },

    /// The body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode query: {0}")]
    Encode(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// HTTP status of a failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message_carries_reason() {
        let err = HttpError::RequestFailed {
            context: "Failed to get server realm",
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to get server realm: Not Found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_sdk_error_not_found_passthrough() {
        let err = SdkError::from(HttpError::RequestFailed {
            context: "Failed to get bulk items",
            status: 404,
            reason: "Not Found".to_string(),
        });
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Not Found"));

        let other = SdkError::Validation("bad".to_string());
        assert!(!other.is_not_found());
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err = HttpError::Decode("expected a sequence".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
