//! Ingestion: normalize raw source deliveries into domain events and
//! classify them against the working log.
//!
//! Field names are normalized here (a shot's nested possession reference
//! is flattened to a bare `team_id`). Unrecognized labels and malformed
//! payloads are dropped with a log line; the pipeline never fails on
//! source garbage. Shots are logged whatever their result, so the shot
//! list view sees misses and saves too.

use chrono::{DateTime, Utc};
use matchday_domain::{EventId, MatchEvent, PeriodNumber, Person, ShotResult, Team, TeamId};
use matchday_eventlog::EventLog;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{FeedError, FeedResult};
use crate::ports::RawSourceEvent;

// =============================================================================
// Wire labels
// =============================================================================

mod labels {
    pub const MATCH_CREATED: &str = "sportingEventCreated";
    pub const SHOT: &str = "shot";
    pub const GOAL_CORRECTION: &str = "goalCorrection";
    pub const SUBSTITUTION: &str = "substitution";
    pub const PERIOD_START: &str = "startPeriod";
    pub const PERIOD_END: &str = "endPeriod";
    pub const RETRACTION: &str = "observationRemoved";
}

// =============================================================================
// Payload shapes
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamPayload {
    team_id: String,
    #[serde(default)]
    name: String,
}

impl TeamPayload {
    fn into_team(self) -> FeedResult<Team> {
        Ok(Team::new(TeamId::new(self.team_id)?, self.name))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchCreatedPayload {
    home_team: TeamPayload,
    away_team: TeamPayload,
    scheduled_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PossessionPayload {
    team_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShotPayload {
    id: String,
    time: Option<DateTime<Utc>>,
    person_id: String,
    person: String,
    result: ShotResult,
    #[serde(rename = "type")]
    shot_type: Option<String>,
    possession: PossessionPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalCorrectionPayload {
    id: String,
    team_id: String,
    time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubstitutionPayload {
    id: String,
    team_id: String,
    time: Option<DateTime<Utc>>,
    in_person_id: String,
    in_person: String,
    out_person_id: String,
    out_person: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodStartPayload {
    period: u8,
    occurred_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodEndPayload {
    period: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetractionPayload {
    #[serde(default)]
    id: Option<String>,
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalize a raw delivery into a domain event.
///
/// Returns `None` for unrecognized labels and payloads that do not parse;
/// both are the source's problem and must not crash the pipeline.
pub fn normalize(raw: &RawSourceEvent) -> Option<MatchEvent> {
    let parsed = match raw.event_type.as_str() {
        labels::MATCH_CREATED => parse_match_created(&raw.payload),
        labels::SHOT => parse_shot(&raw.payload, raw.source_time),
        labels::GOAL_CORRECTION => parse_goal_correction(&raw.payload, raw.source_time),
        labels::SUBSTITUTION => parse_substitution(&raw.payload, raw.source_time),
        labels::PERIOD_START => parse_period_start(&raw.payload, raw.source_time),
        labels::PERIOD_END => parse_period_end(&raw.payload),
        labels::RETRACTION => parse_retraction(&raw.payload),
        other => {
            debug!(label = other, "Unrecognized event label, ignoring");
            return None;
        }
    };

    match parsed {
        Ok(event) => Some(event),
        Err(error) => {
            warn!(label = %raw.event_type, %error, "Dropping malformed event payload");
            None
        }
    }
}

/// Classify a normalized event against the working log.
///
/// Retractions remove their target (first occurrence, silently tolerant
/// of unknown ids); everything else is appended in arrival order.
pub fn apply(log: &mut EventLog, event: MatchEvent) {
    match event {
        MatchEvent::Retraction { id: Some(id) } => {
            log.retract(&id);
        }
        MatchEvent::Retraction { id: None } => {
            debug!("Retraction without id, ignoring");
        }
        event => log.append(event),
    }
}

fn decode<T: serde::de::DeserializeOwned>(label: &str, payload: &Value) -> FeedResult<T> {
    serde_json::from_value::<T>(payload.clone()).map_err(|e| FeedError::InvalidPayload {
        label: label.to_string(),
        reason: e.to_string(),
    })
}

fn parse_match_created(payload: &Value) -> FeedResult<MatchEvent> {
    let payload: MatchCreatedPayload = decode(labels::MATCH_CREATED, payload)?;
    Ok(MatchEvent::MatchCreated {
        home_team: payload.home_team.into_team()?,
        away_team: payload.away_team.into_team()?,
        scheduled_at: payload.scheduled_at,
    })
}

fn parse_shot(payload: &Value, source_time: DateTime<Utc>) -> FeedResult<MatchEvent> {
    let payload: ShotPayload = decode(labels::SHOT, payload)?;
    Ok(MatchEvent::Shot {
        id: EventId::new(payload.id)?,
        team_id: TeamId::new(payload.possession.team_id)?,
        time: payload.time.unwrap_or(source_time),
        shooter: Person { person_id: payload.person_id, name: payload.person },
        result: payload.result,
        shot_type: payload.shot_type,
    })
}

fn parse_goal_correction(payload: &Value, source_time: DateTime<Utc>) -> FeedResult<MatchEvent> {
    let payload: GoalCorrectionPayload = decode(labels::GOAL_CORRECTION, payload)?;
    Ok(MatchEvent::GoalCorrection {
        id: EventId::new(payload.id)?,
        team_id: TeamId::new(payload.team_id)?,
        time: payload.time.unwrap_or(source_time),
    })
}

fn parse_substitution(payload: &Value, source_time: DateTime<Utc>) -> FeedResult<MatchEvent> {
    let payload: SubstitutionPayload = decode(labels::SUBSTITUTION, payload)?;
    Ok(MatchEvent::Substitution {
        id: EventId::new(payload.id)?,
        team_id: TeamId::new(payload.team_id)?,
        time: payload.time.unwrap_or(source_time),
        player_in: Person { person_id: payload.in_person_id, name: payload.in_person },
        player_out: Person { person_id: payload.out_person_id, name: payload.out_person },
    })
}

fn parse_period_start(payload: &Value, source_time: DateTime<Utc>) -> FeedResult<MatchEvent> {
    let payload: PeriodStartPayload = decode(labels::PERIOD_START, payload)?;
    Ok(MatchEvent::PeriodStart {
        period: PeriodNumber::new(payload.period)?,
        occurred_on: payload.occurred_on.unwrap_or(source_time),
    })
}

fn parse_period_end(payload: &Value) -> FeedResult<MatchEvent> {
    let payload: PeriodEndPayload = decode(labels::PERIOD_END, payload)?;
    Ok(MatchEvent::PeriodEnd { period: PeriodNumber::new(payload.period)? })
}

fn parse_retraction(payload: &Value) -> FeedResult<MatchEvent> {
    let payload: RetractionPayload = decode(labels::RETRACTION, payload)?;
    // An empty id is as good as no id: nothing it could ever address
    let id = payload.id.filter(|id| !id.is_empty()).map(EventId::new).transpose()?;
    Ok(MatchEvent::Retraction { id })
}

// =============================================================================
// Tests
// =============================================================================
