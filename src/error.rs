//! Error types for rating updates and matchmaking
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating and matchmaking scenarios
#[derive(Debug, thiserror::Error)]
pub enum MatchmakingError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Unsupported operation `{operation}`: {reason}")]
    UnsupportedOperation { operation: String, reason: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl MatchmakingError {
    /// Check whether an error chain carries an `InvalidArgument`
    pub fn is_invalid_argument(error: &anyhow::Error) -> bool {
        matches!(
            error.downcast_ref::<MatchmakingError>(),
            Some(MatchmakingError::InvalidArgument { .. })
        )
    }

    /// Check whether an error chain carries an `UnsupportedOperation`
    pub fn is_unsupported_operation(error: &anyhow::Error) -> bool {
        matches!(
            error.downcast_ref::<MatchmakingError>(),
            Some(MatchmakingError::UnsupportedOperation { .. })
        )
    }
}
