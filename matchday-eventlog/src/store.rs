//! Mutable working log owned by the aggregation engine.

use crate::snapshot::LogSnapshot;
use matchday_domain::{EventId, MatchEvent};
use std::sync::Arc;
use tracing::debug;

/// Ordered, mutable collection of match events with id-based retraction.
///
/// Order is arrival order from the source, never event-time order. The log
/// performs no deduplication beyond what retraction achieves and no
/// validation of field completeness; both happen upstream, at ingestion.
///
/// Created empty per connection and discarded when the endpoint changes.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Arc<MatchEvent>>,
}

impl EventLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event to the end of the log. Always succeeds.
    pub fn append(&mut self, event: MatchEvent) {
        self.events.push(Arc::new(event));
    }

    /// Remove the first event whose id equals `id`.
    ///
    /// Returns whether an event was removed. Unknown ids are a silent
    /// no-op, so repeating a retraction is idempotent.
    pub fn retract(&mut self, id: &EventId) -> bool {
        match self.events.iter().position(|e| e.id() == Some(id)) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => {
                debug!(id = %id, "Retraction target not in log, ignoring");
                false
            }
        }
    }

    /// Take an immutable snapshot of the current contents.
    ///
    /// The snapshot shares events with the log but not the sequence, so
    /// later mutation cannot corrupt an already-published snapshot.
    pub fn snapshot(&self) -> LogSnapshot {
        LogSnapshot::from_events(&self.events)
    }

    /// Number of events currently in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all events (useful for test setup).
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use matchday_domain::{Person, ShotResult, Team, TeamId};

    fn shot(id: &str, team: &str) -> MatchEvent {
        MatchEvent::Shot {
            id: EventId::new(id).unwrap(),
            team_id: TeamId::new(team).unwrap(),
            time: Utc::now(),
            shooter: Person { person_id: "p1".to_string(), name: "Jansen".to_string() },
            result: ShotResult::Goal,
            shot_type: None,
        }
    }

    fn match_created() -> MatchEvent {
        MatchEvent::MatchCreated {
            home_team: Team::new(TeamId::new("home").unwrap(), "Ajax"),
            away_team: Team::new(TeamId::new("away").unwrap(), "Feyenoord"),
            scheduled_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_preserves_arrival_order() {
        let mut log = EventLog::new();
        log.append(match_created());
        log.append(shot("s1", "home"));
        log.append(shot("s2", "away"));

        let snapshot = log.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(0).unwrap().event_type(), "matchCreated");
        assert_eq!(snapshot.get(1).unwrap().id().unwrap().as_str(), "s1");
        assert_eq!(snapshot.get(2).unwrap().id().unwrap().as_str(), "s2");
    }

    #[test]
    fn test_retract_removes_first_match_only() {
        let mut log = EventLog::new();
        log.append(shot("dup", "home"));
        log.append(shot("dup", "away"));

        assert!(log.retract(&EventId::new("dup").unwrap()));
        assert_eq!(log.len(), 1);

        // The second occurrence survives
        let snapshot = log.snapshot();
        assert_eq!(snapshot.get(0).unwrap().team_id().unwrap().as_str(), "away");
    }

    #[test]
    fn test_retract_unknown_id_is_noop() {
        let mut log = EventLog::new();
        log.append(shot("s1", "home"));

        assert!(!log.retract(&EventId::new("missing").unwrap()));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_retract_is_idempotent() {
        let mut log = EventLog::new();
        log.append(shot("s1", "home"));

        let id = EventId::new("s1").unwrap();
        assert!(log.retract(&id));
        assert!(!log.retract(&id));
        assert!(log.is_empty());
    }

    #[test]
    fn test_events_without_ids_cannot_be_retracted() {
        let mut log = EventLog::new();
        log.append(match_created());

        // No id can ever address a MatchCreated entry
        assert!(!log.retract(&EventId::new("anything").unwrap()));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutation() {
        let mut log = EventLog::new();
        log.append(shot("s1", "home"));

        let snapshot = log.snapshot();
        log.append(shot("s2", "away"));
        log.retract(&EventId::new("s1").unwrap());

        // The published snapshot still shows the state at capture time
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(0).unwrap().id().unwrap().as_str(), "s1");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut log = EventLog::new();
        log.append(shot("s1", "home"));
        log.clear();
        assert!(log.is_empty());
    }
}
