//! Typed error enum for gateway operations.

use thiserror::Error;

/// Errors surfaced by gateway operations.
///
/// A single failed call produces a single error; the layer performs no
/// retry or backoff. Callers distinguish status errors from transport
/// errors by matching, never by string inspection.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Completed HTTP exchange with a non-success status.
    #[error("request failed with status code {0}")]
    Status(u16),

    /// Login-specific remap of HTTP 401.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Network failure before a status was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body that is not valid JSON or does not match the declared shape.
    #[error("malformed response body: {source}")]
    MalformedBody {
        #[source]
        source: serde_json::Error,
    },

    /// Raised by the null-object gateway for every operation.
    #[error("gateway operation not implemented")]
    Unimplemented,
}

impl GatewayError {
    /// The numeric HTTP status, for completed non-success exchanges.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }

    /// Replace a specific status error with a domain-mapped error,
    /// preserving every other error unchanged.
    #[must_use]
    pub fn remap_status(self, status: u16, to: Self) -> Self {
        match self {
            Self::Status(code) if code == status => to,
            other => other,
        }
    }
}

/// Result alias used by every gateway operation.
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        assert_eq!(GatewayError::Status(404).status(), Some(404));
        assert_eq!(GatewayError::InvalidCredentials.status(), None);
        assert_eq!(GatewayError::Unimplemented.status(), None);
    }

    #[test]
    fn test_remap_matching_status() {
        let err = GatewayError::Status(401).remap_status(401, GatewayError::InvalidCredentials);
        assert!(matches!(err, GatewayError::InvalidCredentials));
    }

    #[test]
    fn test_remap_preserves_other_statuses() {
        let err = GatewayError::Status(500).remap_status(401, GatewayError::InvalidCredentials);
        assert_eq!(err.status(), Some(500));
    }
}
