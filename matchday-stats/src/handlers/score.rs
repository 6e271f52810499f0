//! Score derivation.
//!
//! Counts goal-scoring events (shots with a `Goal` result plus every goal
//! correction) partitioned by side. Events whose team id matches neither
//! side are not counted, keeping this view consistent with the goal
//! timeline.

use matchday_domain::{MatchSummary, Score};
use matchday_eventlog::LogSnapshot;

pub(crate) fn collect(log: &LogSnapshot, summary: Option<&MatchSummary>) -> Option<Score> {
    let summary = summary?;

    let mut score = Score::default();
    for event in log.iter().filter(|event| event.is_goal()) {
        if let Some(side) = event.team_id().and_then(|id| summary.side_of(id)) {
            score = score.credit(side);
        }
    }

    Some(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::match_info;
    use matchday_eventlog::EventLog;
    use matchday_testkit::events::{goal_correction, match_created, shot_goal, shot_miss};

    #[test]
    fn test_counts_goals_and_corrections_per_side() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "home"));
        log.append(shot_miss("s2", "home"));
        log.append(goal_correction("c1", "away"));
        log.append(shot_goal("s3", "away"));

        let snapshot = log.snapshot();
        let summary = match_info::collect(&snapshot);
        let score = collect(&snapshot, summary.as_ref()).unwrap();

        assert_eq!(score, Score { home: 1, away: 2 });
    }

    #[test]
    fn test_no_match_means_no_score() {
        let mut log = EventLog::new();
        log.append(shot_goal("s1", "home"));

        assert!(collect(&log.snapshot(), None).is_none());
    }

    #[test]
    fn test_unattributable_goals_not_counted() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "third-team"));

        let snapshot = log.snapshot();
        let summary = match_info::collect(&snapshot);
        let score = collect(&snapshot, summary.as_ref()).unwrap();

        assert_eq!(score, Score::default());
    }
}
