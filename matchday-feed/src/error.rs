//! Feed error types.

use matchday_domain::DomainError;
use thiserror::Error;

/// Feed-level errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Domain error
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Event payload did not match its label's shape
    #[error("Invalid payload for event {label}: {reason}")]
    InvalidPayload {
        /// Wire label of the offending event
        label: String,
        /// Why deserialization failed
        reason: String,
    },

    /// Event source failed
    #[error("Event source error: {0}")]
    Source(String),

    /// Delivery channel closed before the source finished
    #[error("Delivery channel closed")]
    ChannelClosed,
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
