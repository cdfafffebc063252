//! Error taxonomy for REST calls.
//!
//! Every variant is recoverable: callers map it to a toast and, for some
//! views, a fallback navigation.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("not found")]
    NotFound,
    #[error("not authenticated")]
    Unauthorized,
    #[error("not authorized")]
    Forbidden,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    /// The call was attempted outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }
}
