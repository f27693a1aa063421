//! Common error handling utilities and conventions

/// Standard result type for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Session error types shared across crates
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum SessionError {
    /// A token write was rejected because the value does not have the
    /// expected 3-segment shape
    #[error("Malformed token: {message}")]
    MalformedToken { message: String },

    /// The underlying storage backend failed (disabled, quota, ...)
    #[error("Storage operation failed: {message}")]
    Storage { message: String },
}

impl SessionError {
    /// Create a malformed token error
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::MalformedToken {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
