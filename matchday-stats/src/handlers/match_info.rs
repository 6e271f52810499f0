//! Match identity derivation.
//!
//! INVARIANT: exactly one MatchCreated event defines the match. Zero or
//! multiple leave the identity undefined, and every team-attributed view
//! downstream returns its neutral empty form instead of guessing.

use matchday_domain::{MatchEvent, MatchSummary};
use matchday_eventlog::LogSnapshot;
use tracing::debug;

pub(crate) fn collect(log: &LogSnapshot) -> Option<MatchSummary> {
    let mut created = log.iter().filter_map(|event| match event {
        MatchEvent::MatchCreated { home_team, away_team, scheduled_at } => Some(MatchSummary {
            home_team: home_team.clone(),
            away_team: away_team.clone(),
            scheduled_at: *scheduled_at,
        }),
        _ => None,
    });

    match (created.next(), created.next()) {
        (Some(summary), None) => Some(summary),
        (None, _) => None,
        (Some(_), Some(_)) => {
            debug!("Multiple matchCreated events in log, match identity undefined");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_eventlog::EventLog;
    use matchday_testkit::events::{match_created, shot_goal};

    #[test]
    fn test_single_match_created() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "home"));

        let summary = collect(&log.snapshot()).unwrap();
        assert_eq!(summary.home_team.team_id.as_str(), "home");
        assert_eq!(summary.away_team.team_id.as_str(), "away");
    }

    #[test]
    fn test_empty_log_has_no_match() {
        assert!(collect(&EventLog::new().snapshot()).is_none());
    }

    #[test]
    fn test_duplicate_match_created_undefined() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(match_created("home", "away"));

        assert!(collect(&log.snapshot()).is_none());
    }
}
