//! Immutable snapshots of the event log.

use matchday_domain::MatchEvent;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::sync::Arc;

/// An immutable, order-preserving copy of the event log at a point in time.
///
/// Snapshots share the underlying events with the log that produced them
/// (`Arc` per event), so taking one is O(n) pointer clones and cloning one
/// is O(1). A snapshot never aliases the mutable working log: appends and
/// retractions after `snapshot()` cannot be observed through it.
#[derive(Debug, Clone)]
pub struct LogSnapshot {
    events: Arc<[Arc<MatchEvent>]>,
}

impl LogSnapshot {
    pub(crate) fn from_events(events: &[Arc<MatchEvent>]) -> Self {
        Self { events: events.to_vec().into() }
    }

    /// An empty snapshot (the state before any flush).
    pub fn empty() -> Self {
        Self { events: Vec::new().into() }
    }

    /// Number of events in the snapshot.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the snapshot contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in log (arrival) order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().map(Arc::as_ref)
    }

    /// Get the event at `index`, in log order.
    pub fn get(&self, index: usize) -> Option<&MatchEvent> {
        self.events.get(index).map(Arc::as_ref)
    }

    /// Whether two snapshots are the same published value.
    ///
    /// Pointer comparison, not structural: consumers use this to decide
    /// whether the log part of a published state changed between updates.
    pub fn same_as(&self, other: &LogSnapshot) -> bool {
        Arc::ptr_eq(&self.events, &other.events)
    }
}

impl Serialize for LogSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.events.len()))?;
        for event in self.iter() {
            seq.serialize_element(event)?;
        }
        seq.end()
    }
}
