//! Domain events for a sporting match.
//!
//! Events are immutable records delivered by the event source, normalized
//! at ingestion (nested team references flattened to a bare `team_id`).
//! The log keeps them in arrival order; nothing here implies event-time
//! ordering.

use crate::entities::{Person, Team};
use crate::value_objects::{EventId, PeriodNumber, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a shot as reported by the source.
///
/// Unknown wire values fold into `Other` so a new outcome label never
/// breaks ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotResult {
    /// The shot scored
    Goal,
    /// Wide or over
    Miss,
    /// Kept out by the goalkeeper
    Saved,
    /// Blocked by a defender
    Blocked,
    /// Hit the woodwork
    Post,
    /// Any outcome this build does not recognize
    #[serde(other)]
    Other,
}

impl ShotResult {
    /// Whether this result counts as a goal.
    pub fn is_goal(&self) -> bool {
        matches!(self, ShotResult::Goal)
    }
}

/// Domain events for the match event log.
///
/// Serialized form uses the source's camelCase vocabulary, tagged by
/// `eventType`, so the raw log view reads like the upstream feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MatchEvent {
    /// The match was created; exactly one must be active in a valid log
    MatchCreated {
        /// Home team
        home_team: Team,
        /// Away team
        away_team: Team,
        /// Scheduled kick-off instant
        scheduled_at: DateTime<Utc>,
    },

    /// A shot was taken (any result; `Goal` results score)
    Shot {
        /// Source-assigned event id
        id: EventId,
        /// Team the shot is attributed to
        team_id: TeamId,
        /// When the shot occurred
        time: DateTime<Utc>,
        /// Player who took the shot
        shooter: Person,
        /// Outcome of the shot
        result: ShotResult,
        /// Free-form shot classification from the source (header, penalty, ...)
        shot_type: Option<String>,
    },

    /// A goal awarded by correction, independent of any Shot event
    GoalCorrection {
        /// Source-assigned event id
        id: EventId,
        /// Team the goal is credited to
        team_id: TeamId,
        /// When the correction applies
        time: DateTime<Utc>,
    },

    /// A player substitution
    Substitution {
        /// Source-assigned event id
        id: EventId,
        /// Team making the change
        team_id: TeamId,
        /// When the substitution occurred
        time: DateTime<Utc>,
        /// Player coming on
        player_in: Person,
        /// Player going off
        player_out: Person,
    },

    /// A playing period started
    PeriodStart {
        /// Period number (1-based)
        period: PeriodNumber,
        /// Source-reported instant the period started
        occurred_on: DateTime<Utc>,
    },

    /// A playing period ended
    PeriodEnd {
        /// Period number (1-based)
        period: PeriodNumber,
    },

    /// Retraction of a previously logged event by id.
    ///
    /// Consumed at ingestion: it removes the first log entry with a
    /// matching id and is never itself appended. A missing id makes it a
    /// no-op.
    Retraction {
        /// Id of the event to remove, when the source provided one
        id: Option<EventId>,
    },
}

impl MatchEvent {
    /// Get the source-assigned id, for events that carry one.
    ///
    /// MatchCreated and period boundaries have no id and cannot be
    /// retracted.
    pub fn id(&self) -> Option<&EventId> {
        match self {
            MatchEvent::Shot { id, .. }
            | MatchEvent::GoalCorrection { id, .. }
            | MatchEvent::Substitution { id, .. } => Some(id),
            MatchEvent::Retraction { id } => id.as_ref(),
            MatchEvent::MatchCreated { .. }
            | MatchEvent::PeriodStart { .. }
            | MatchEvent::PeriodEnd { .. } => None,
        }
    }

    /// Get the attributed team id, for events tied to one team.
    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            MatchEvent::Shot { team_id, .. }
            | MatchEvent::GoalCorrection { team_id, .. }
            | MatchEvent::Substitution { team_id, .. } => Some(team_id),
            _ => None,
        }
    }

    /// Whether this event scores a goal (a Shot with `Goal` result or any
    /// GoalCorrection).
    pub fn is_goal(&self) -> bool {
        match self {
            MatchEvent::Shot { result, .. } => result.is_goal(),
            MatchEvent::GoalCorrection { .. } => true,
            _ => false,
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            MatchEvent::MatchCreated { .. } => "matchCreated",
            MatchEvent::Shot { .. } => "shot",
            MatchEvent::GoalCorrection { .. } => "goalCorrection",
            MatchEvent::Substitution { .. } => "substitution",
            MatchEvent::PeriodStart { .. } => "periodStart",
            MatchEvent::PeriodEnd { .. } => "periodEnd",
            MatchEvent::Retraction { .. } => "retraction",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shot(id: &str, result: ShotResult) -> MatchEvent {
        MatchEvent::Shot {
            id: EventId::new(id).unwrap(),
            team_id: TeamId::new("home").unwrap(),
            time: Utc::now(),
            shooter: Person { person_id: "p1".to_string(), name: "Jansen".to_string() },
            result,
            shot_type: Some("header".to_string()),
        }
    }

    fn sample_match_created() -> MatchEvent {
        MatchEvent::MatchCreated {
            home_team: Team::new(TeamId::new("home").unwrap(), "Ajax"),
            away_team: Team::new(TeamId::new("away").unwrap(), "Feyenoord"),
            scheduled_at: Utc::now(),
        }
    }

    #[test]
    fn test_event_serialization_shot() {
        let event = sample_shot("obs-1", ShotResult::Goal);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: MatchEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
        assert_eq!(event.event_type(), "shot");
    }

    #[test]
    fn test_event_json_format() {
        let event = sample_match_created();
        let json = serde_json::to_string(&event).unwrap();

        // Tagged with the source vocabulary, camelCase fields
        assert!(json.contains("\"eventType\":\"matchCreated\""));
        assert!(json.contains("\"homeTeam\""));
        assert!(json.contains("\"scheduledAt\""));
    }

    #[test]
    fn test_id_accessor() {
        assert_eq!(sample_shot("obs-1", ShotResult::Miss).id().unwrap().as_str(), "obs-1");
        assert!(sample_match_created().id().is_none());
        assert!(MatchEvent::PeriodEnd { period: PeriodNumber::new(1).unwrap() }.id().is_none());

        let retraction = MatchEvent::Retraction { id: None };
        assert!(retraction.id().is_none());
    }

    #[test]
    fn test_is_goal() {
        assert!(sample_shot("obs-1", ShotResult::Goal).is_goal());
        assert!(!sample_shot("obs-2", ShotResult::Saved).is_goal());

        let correction = MatchEvent::GoalCorrection {
            id: EventId::new("corr-1").unwrap(),
            team_id: TeamId::new("away").unwrap(),
            time: Utc::now(),
        };
        assert!(correction.is_goal());
        assert!(!sample_match_created().is_goal());
    }

    #[test]
    fn test_unknown_shot_result_folds_to_other() {
        let result: ShotResult = serde_json::from_str("\"DEFLECTED\"").unwrap();
        assert_eq!(result, ShotResult::Other);
        assert!(!result.is_goal());
    }
}
