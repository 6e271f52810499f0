//! Goal timeline derivation.
//!
//! Emits goal-scoring events in log order, each annotated with the
//! attributed team and the cumulative score as of and including that goal
//! (the first goal reads 1-0 or 0-1, never 0-0). Goals that cannot be
//! attributed to either side are skipped, matching the score derivation.

use crate::types::{GoalEntry, GoalKind};
use matchday_domain::{MatchEvent, MatchSummary, Score};
use matchday_eventlog::LogSnapshot;
use tracing::debug;

pub(crate) fn collect(log: &LogSnapshot, summary: Option<&MatchSummary>) -> Vec<GoalEntry> {
    let Some(summary) = summary else {
        return Vec::new();
    };

    let mut score = Score::default();
    let mut goals = Vec::new();

    for event in log.iter() {
        let (id, team_id, time, scorer, kind) = match event {
            MatchEvent::Shot { id, team_id, time, shooter, result, .. } if result.is_goal() => {
                (id, team_id, *time, Some(shooter.clone()), GoalKind::Shot)
            }
            MatchEvent::GoalCorrection { id, team_id, time } => {
                (id, team_id, *time, None, GoalKind::Correction)
            }
            _ => continue,
        };

        let Some(side) = summary.side_of(team_id) else {
            debug!(id = %id, team_id = %team_id, "Goal for unknown team, skipping");
            continue;
        };

        score = score.credit(side);
        goals.push(GoalEntry {
            id: id.clone(),
            team: summary.team(side).clone(),
            side,
            time,
            scorer,
            kind,
            score,
        });
    }

    goals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::match_info;
    use matchday_domain::TeamSide;
    use matchday_eventlog::EventLog;
    use matchday_testkit::events::{goal_correction, match_created, shot_goal, shot_miss};

    #[test]
    fn test_running_score_includes_each_goal() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "away"));
        log.append(shot_miss("s2", "home"));
        log.append(shot_goal("s3", "home"));
        log.append(goal_correction("c1", "away"));

        let snapshot = log.snapshot();
        let summary = match_info::collect(&snapshot);
        let goals = collect(&snapshot, summary.as_ref());

        assert_eq!(goals.len(), 3);

        assert_eq!(goals[0].side, TeamSide::Away);
        assert_eq!(goals[0].score, Score { home: 0, away: 1 });
        assert_eq!(goals[0].kind, GoalKind::Shot);
        assert!(goals[0].scorer.is_some());

        assert_eq!(goals[1].side, TeamSide::Home);
        assert_eq!(goals[1].score, Score { home: 1, away: 1 });

        assert_eq!(goals[2].kind, GoalKind::Correction);
        assert!(goals[2].scorer.is_none());
        assert_eq!(goals[2].score, Score { home: 1, away: 2 });
    }

    #[test]
    fn test_no_match_means_empty_timeline() {
        let mut log = EventLog::new();
        log.append(shot_goal("s1", "home"));

        assert!(collect(&log.snapshot(), None).is_empty());
    }

    #[test]
    fn test_team_annotation() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "home"));

        let snapshot = log.snapshot();
        let summary = match_info::collect(&snapshot);
        let goals = collect(&snapshot, summary.as_ref());

        assert_eq!(goals[0].team.team_id.as_str(), "home");
        assert_eq!(goals[0].team.name, summary.unwrap().home_team.name);
    }
}
