//! Matchday Domain Layer
//!
//! Pure domain logic with zero I/O dependencies.
//! Contains the match event vocabulary, entities, and value objects.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod entities;
pub mod events;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{MatchSummary, PeriodPhase, PeriodStatus, Person, Score, Team, TeamSide};
pub use events::{MatchEvent, ShotResult};
pub use value_objects::{DomainError, EventId, PeriodNumber, TeamId};
