//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error; the backend was never reached or never
    /// answered
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend rejected the session token (expired or revoked)
    #[error("Session rejected: {0}")]
    SessionRejected(String),

    /// Any other non-success status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::SessionRejected(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the backend rejected the session token itself
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::SessionRejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn unauthorized_maps_to_session_rejection() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "expired".into());
        assert!(matches!(err, ClientError::SessionRejected(_)));
        assert!(err.is_auth_expired());
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
        assert!(!err.is_auth_expired());

        let err = ClientError::from_status(StatusCode::FORBIDDEN, "no".into());
        assert!(matches!(err, ClientError::ServerError { status: 403, .. }));
    }
}
