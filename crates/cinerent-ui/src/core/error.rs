//! Failure taxonomy for authorized calls.

use thiserror::Error;

/// Result of an operation routed through the authorized client.
pub type Outcome<T> = Result<T, AccessError>;

/// Why an operation did not succeed.
///
/// `Display` renders the text shown to the user; `Decode` and `Network`
/// carry diagnostic detail for logs as well.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// No session was present; no request was issued.
    #[error("You must be logged in.")]
    Unauthenticated,
    /// The server rejected the credential; the session has been cleared.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,
    /// The principal lacks permission for a mutation.
    #[error("You do not have permission to perform this action.")]
    Forbidden,
    /// The server rejected the request (`400`), with its user-facing message.
    #[error("{message}")]
    ClientError {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
    /// Any other non-success status.
    #[error("Request failed (status {status}).")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },
    /// The request never produced a response.
    #[error("Connection error: {0}")]
    Network(String),
    /// A success response could not be interpreted.
    #[error("Unexpected response format: {0}")]
    Decode(String),
    /// Input rejected before any request was issued.
    #[error("{0}")]
    Validation(String),
}

impl AccessError {
    /// Convenience constructor for a `400` rejection.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::ClientError {
            status: 400,
            message: message.into(),
        }
    }

    /// Whether this failure ended the session (or found none).
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Unauthorized)
    }

    /// Stable label for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::ClientError { .. } => "client_error",
            Self::ServerError { .. } => "server_error",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::Validation(_) => "validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_user_facing() {
        assert_eq!(
            AccessError::client("Cannot delete yourself.").to_string(),
            "Cannot delete yourself."
        );
        assert_eq!(
            AccessError::ServerError { status: 503 }.to_string(),
            "Request failed (status 503)."
        );
        assert_eq!(
            AccessError::Network("offline".to_string()).to_string(),
            "Connection error: offline"
        );
    }

    #[test]
    fn auth_failures_are_flagged() {
        assert!(AccessError::Unauthenticated.is_auth_failure());
        assert!(AccessError::Unauthorized.is_auth_failure());
        assert!(!AccessError::Forbidden.is_auth_failure());
        assert_eq!(AccessError::Forbidden.kind(), "forbidden");
    }
}
