//! Entities and shared read-model types for the matchday domain.
//!
//! These are the shapes published to presentation consumers, so everything
//! here is serializable. Team identity is `team_id`; every other field is
//! display data carried through from the source.

use crate::value_objects::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// =============================================================================
// Team & Person
// =============================================================================

/// A team taking part in the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Source-assigned team identity
    pub team_id: TeamId,
    /// Display name
    pub name: String,
}

impl Team {
    /// Create a new team.
    pub fn new(team_id: TeamId, name: impl Into<String>) -> Self {
        Self { team_id, name: name.into() }
    }
}

/// A person referenced by an event (shooter, substituted player).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Source-assigned person identity
    pub person_id: String,
    /// Display name
    pub name: String,
}

// =============================================================================
// Match summary
// =============================================================================

/// Which side of the match a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    /// The home team
    Home,
    /// The away team
    Away,
}

/// Match identity derived from the single active MatchCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// Home team
    pub home_team: Team,
    /// Away team
    pub away_team: Team,
    /// Scheduled kick-off instant as reported by the source
    pub scheduled_at: DateTime<Utc>,
}

impl MatchSummary {
    /// Attribute a team id to a side of this match.
    ///
    /// Returns `None` when the id belongs to neither team; callers treat
    /// such events as unattributable and skip them.
    pub fn side_of(&self, team_id: &TeamId) -> Option<TeamSide> {
        if *team_id == self.home_team.team_id {
            Some(TeamSide::Home)
        } else if *team_id == self.away_team.team_id {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    /// Get the team playing on the given side.
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }
}

// =============================================================================
// Score
// =============================================================================

/// Running match score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Goals credited to the home team
    pub home: u32,
    /// Goals credited to the away team
    pub away: u32,
}

impl Score {
    /// Credit one goal to the given side, returning the new score.
    pub fn credit(self, side: TeamSide) -> Self {
        match side {
            TeamSide::Home => Self { home: self.home + 1, ..self },
            TeamSide::Away => Self { away: self.away + 1, ..self },
        }
    }

    /// Total number of goals counted.
    pub fn total(&self) -> u32 {
        self.home + self.away
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

// =============================================================================
// Periods
// =============================================================================

/// Lifecycle phase of a playing period.
///
/// `Ended` dominates `Started` dominates `NotStarted`: once a PeriodEnd is
/// seen the period counts as ended regardless of whether (or when) its
/// PeriodStart arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodPhase {
    /// Neither start nor end seen
    NotStarted,
    /// Start seen, no end yet
    Started,
    /// End seen
    Ended,
}

/// Derived state of one configured period slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStatus {
    /// Period number (1-based)
    pub period: u8,
    /// Current phase
    pub phase: PeriodPhase,
    /// Time elapsed since the period started, when a server time is known.
    ///
    /// Absent for periods that are not in progress and whenever no clock
    /// sync has been received yet.
    pub elapsed: Option<Duration>,
}

// =============================================================================
// Tests
// =============================================================================
