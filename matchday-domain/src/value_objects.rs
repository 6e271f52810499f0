//! Value objects for the matchday domain.
//!
//! Immutable, validated domain primitives. Identifiers are opaque strings
//! assigned by the event source; we only enforce non-emptiness, since an
//! empty id can never address anything.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain errors for value object validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Team id must be non-empty
    #[error("Invalid team id: {0}")]
    InvalidTeamId(String),

    /// Event id must be non-empty
    #[error("Invalid event id: {0}")]
    InvalidEventId(String),

    /// Period numbers start at 1
    #[error("Invalid period number: {0}")]
    InvalidPeriod(String),
}

// =============================================================================
// TeamId
// =============================================================================

/// TeamId is the identity of a team as assigned by the event source.
///
/// # Invariants
/// - Must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTeamId` if the value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidTeamId("Team id must be non-empty".to_string()));
        }
        Ok(Self(value))
    }

    /// Get the underlying string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// EventId
// =============================================================================

/// EventId is the source-assigned identity of a loggable event.
///
/// Retraction addresses events by this id, so the empty string is rejected
/// at construction: a retraction without a usable id is a no-op by contract.
///
/// # Invariants
/// - Must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create a new EventId with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidEventId` if the value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidEventId("Event id must be non-empty".to_string()));
        }
        Ok(Self(value))
    }

    /// Get the underlying string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PeriodNumber
// =============================================================================

/// PeriodNumber identifies a playing period (first half = 1, second = 2, ...).
///
/// # Invariants
/// - Must be >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodNumber(u8);

impl PeriodNumber {
    /// Create a new PeriodNumber with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPeriod` if the value is zero
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidPeriod("Period numbers start at 1".to_string()));
        }
        Ok(Self(value))
    }

    /// Get the underlying period number
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PeriodNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
