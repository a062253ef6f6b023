//! Error types shared by the storefront crates

use serde::{Deserialize, Serialize};

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core itself
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Inconsistent auth state: {message}")]
    InconsistentState { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl CoreError {
    /// Create an inconsistent state error
    pub fn inconsistent_state(message: impl Into<String>) -> Self {
        Self::InconsistentState {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage_error(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_error(err.to_string())
    }
}

/// Error descriptor from the last failed authentication attempt.
///
/// Lives inside [`crate::AuthState`], so it is cloneable and serializable.
/// Nothing in the core interprets it; pages decide how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("{message}")]
    Rejected { message: String },
}

impl AuthError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a server error from a status code and message
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a rejection carrying a message the server wants shown as-is
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Failures that say nothing about whether a session is still valid
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Server { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_is_tagged_on_the_wire() {
        let json = serde_json::to_value(AuthError::server(503, "brewing")).unwrap();
        assert_eq!(json["kind"], "server");
        assert_eq!(json["status"], 503);

        let back: AuthError = serde_json::from_value(json).unwrap();
        assert_eq!(back, AuthError::server(503, "brewing"));
    }

    #[test]
    fn rejected_displays_message_verbatim() {
        let err = AuthError::rejected("Email already registered");
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn outages_are_transient() {
        assert!(AuthError::network("offline").is_transient());
        assert!(AuthError::server(502, "bad gateway").is_transient());
        assert!(!AuthError::InvalidCredentials.is_transient());
        assert!(!AuthError::SessionExpired.is_transient());
        assert!(!AuthError::rejected("token revoked").is_transient());
    }

    #[test]
    fn json_errors_convert_to_serialization() {
        let err: CoreError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(err, CoreError::Serialization { .. }));
    }
}
