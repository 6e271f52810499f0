//! Ready-made domain events for log and stats tests.
//!
//! Builders unwrap value-object construction: ids and team ids passed by
//! tests are expected to be valid.

use chrono::{DateTime, Utc};
use matchday_domain::{
    EventId, MatchEvent, PeriodNumber, Person, ShotResult, Team, TeamId,
};

/// A sample player for shot fixtures.
pub fn shooter() -> Person {
    Person { person_id: "p-10".to_string(), name: "Jansen".to_string() }
}

/// MatchCreated for teams named after their ids.
pub fn match_created(home: &str, away: &str) -> MatchEvent {
    MatchEvent::MatchCreated {
        home_team: Team::new(TeamId::new(home).unwrap(), format!("{} FC", home)),
        away_team: Team::new(TeamId::new(away).unwrap(), format!("{} FC", away)),
        scheduled_at: Utc::now(),
    }
}

/// A shot with a `Goal` result.
pub fn shot_goal(id: &str, team: &str) -> MatchEvent {
    shot(id, team, ShotResult::Goal)
}

/// A shot that missed.
pub fn shot_miss(id: &str, team: &str) -> MatchEvent {
    shot(id, team, ShotResult::Miss)
}

/// A shot with an explicit result.
pub fn shot(id: &str, team: &str, result: ShotResult) -> MatchEvent {
    MatchEvent::Shot {
        id: EventId::new(id).unwrap(),
        team_id: TeamId::new(team).unwrap(),
        time: Utc::now(),
        shooter: shooter(),
        result,
        shot_type: None,
    }
}

/// A goal awarded by correction.
pub fn goal_correction(id: &str, team: &str) -> MatchEvent {
    MatchEvent::GoalCorrection {
        id: EventId::new(id).unwrap(),
        team_id: TeamId::new(team).unwrap(),
        time: Utc::now(),
    }
}

/// A substitution with placeholder players.
pub fn substitution(id: &str, team: &str) -> MatchEvent {
    MatchEvent::Substitution {
        id: EventId::new(id).unwrap(),
        team_id: TeamId::new(team).unwrap(),
        time: Utc::now(),
        player_in: Person { person_id: "p-14".to_string(), name: "Bakker".to_string() },
        player_out: Person { person_id: "p-7".to_string(), name: "Visser".to_string() },
    }
}

/// PeriodStart with an explicit source-reported instant.
pub fn period_start_at(period: u8, occurred_on: DateTime<Utc>) -> MatchEvent {
    MatchEvent::PeriodStart { period: PeriodNumber::new(period).unwrap(), occurred_on }
}

/// PeriodEnd for the given period.
pub fn period_end(period: u8) -> MatchEvent {
    MatchEvent::PeriodEnd { period: PeriodNumber::new(period).unwrap() }
}

/// Retraction of the given source id.
pub fn retraction(id: &str) -> MatchEvent {
    MatchEvent::Retraction { id: Some(EventId::new(id).unwrap()) }
}
