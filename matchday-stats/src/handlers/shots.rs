//! Shot list derivation: every shot in log order, unfiltered by result.
//!
//! Does not depend on match identity; shots are reported even while the
//! match summary is undefined.

use crate::types::ShotRecord;
use matchday_domain::MatchEvent;
use matchday_eventlog::LogSnapshot;

pub(crate) fn collect(log: &LogSnapshot) -> Vec<ShotRecord> {
    log.iter()
        .filter_map(|event| match event {
            MatchEvent::Shot { id, team_id, time, shooter, result, shot_type } => Some(ShotRecord {
                id: id.clone(),
                team_id: team_id.clone(),
                time: *time,
                shooter: shooter.clone(),
                result: *result,
                shot_type: shot_type.clone(),
            }),
            _ => None,
        })
        .collect()
}
