//! Fetch Error Types
//!
//! The report API has a single failure kind. Network errors, non-success
//! statuses and undecodable bodies all collapse into `FetchFailed`, carrying
//! the underlying message for display.

use thiserror::Error;

/// Errors returned by report fetches
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
}

impl FetchError {
    /// Underlying message without the "Fetch failed" prefix
    pub fn message(&self) -> &str {
        match self {
            FetchError::FetchFailed(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let msg = if e.is_connect() {
            format!("connection failed: {}", e)
        } else if e.is_decode() {
            format!("invalid response body: {}", e)
        } else {
            e.to_string()
        };
        FetchError::FetchFailed(msg)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::FetchFailed(format!("unexpected record shape: {}", e))
    }
}

/// Result type for report fetches
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_message() {
        let err = FetchError::FetchFailed("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Fetch failed: HTTP 503");
        assert_eq!(err.message(), "HTTP 503");
    }

    #[test]
    fn test_from_serde_error() {
        let e = serde_json::from_str::<u64>("\"nope\"").unwrap_err();
        let err: FetchError = e.into();
        assert!(err.message().starts_with("unexpected record shape"));
    }
}
