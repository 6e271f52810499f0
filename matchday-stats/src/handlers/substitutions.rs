//! Substitution list derivation.

use crate::types::SubstitutionEntry;
use matchday_domain::{MatchEvent, MatchSummary};
use matchday_eventlog::LogSnapshot;
use tracing::debug;

pub(crate) fn collect(log: &LogSnapshot, summary: Option<&MatchSummary>) -> Vec<SubstitutionEntry> {
    let Some(summary) = summary else {
        return Vec::new();
    };

    let mut subs = Vec::new();
    for event in log.iter() {
        let MatchEvent::Substitution { id, team_id, time, player_in, player_out } = event else {
            continue;
        };

        let Some(side) = summary.side_of(team_id) else {
            debug!(id = %id, team_id = %team_id, "Substitution for unknown team, skipping");
            continue;
        };

        subs.push(SubstitutionEntry {
            id: id.clone(),
            team: summary.team(side).clone(),
            side,
            time: *time,
            player_in: player_in.clone(),
            player_out: player_out.clone(),
        });
    }

    subs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::match_info;
    use matchday_domain::TeamSide;
    use matchday_eventlog::EventLog;
    use matchday_testkit::events::{match_created, substitution};

    #[test]
    fn test_substitutions_in_log_order_with_team() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(substitution("sub-1", "away"));
        log.append(substitution("sub-2", "home"));

        let snapshot = log.snapshot();
        let summary = match_info::collect(&snapshot);
        let subs = collect(&snapshot, summary.as_ref());

        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].id.as_str(), "sub-1");
        assert_eq!(subs[0].side, TeamSide::Away);
        assert_eq!(subs[1].side, TeamSide::Home);
    }

    #[test]
    fn test_no_match_means_empty_list() {
        let mut log = EventLog::new();
        log.append(substitution("sub-1", "home"));

        assert!(collect(&log.snapshot(), None).is_empty());
    }
}
