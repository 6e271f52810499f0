//! State bus for publishing feed snapshots to consumers.
//!
//! Decouples the session loop from presentation surfaces: the loop
//! publishes immutable `FeedState` values, subscribers receive them in
//! publication order. Uses tokio broadcast channels for fan-out to
//! multiple receivers.

use chrono::{DateTime, Utc};
use matchday_eventlog::LogSnapshot;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

// =============================================================================
// Published state
// =============================================================================

/// The combined state published on every flush and clock tick.
///
/// Log snapshot and server time are co-located and republished wholesale,
/// so consumers comparing previous/next state get referential stability:
/// a new `FeedState` means something render-relevant changed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedState {
    /// Latest published log snapshot
    pub event_log: LogSnapshot,
    /// Extrapolated server time; `None` until the first clock sync
    pub server_time: Option<DateTime<Utc>>,
}

impl FeedState {
    /// The state before any flush: empty log, unknown server time.
    pub fn initial() -> Self {
        Self { event_log: LogSnapshot::empty(), server_time: None }
    }
}

// =============================================================================
// State Bus
// =============================================================================

/// Fan-out bus for published feed states.
///
/// Multiple consumers can subscribe; each receives every state published
/// after its subscription. Dropping a receiver unsubscribes it.
#[derive(Debug, Clone)]
pub struct StateBus {
    sender: broadcast::Sender<Arc<FeedState>>,
}

impl StateBus {
    /// Create a new bus with the given buffer capacity.
    ///
    /// Capacity bounds how far a slow receiver may fall behind before it
    /// starts missing states (lagging).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a state to all subscribers.
    ///
    /// Returns the number of receivers that got it; 0 when nobody is
    /// listening.
    pub fn publish(&self, state: Arc<FeedState>) -> usize {
        self.sender.send(state).unwrap_or(0)
    }

    /// Subscribe to published states.
    pub fn subscribe(&self) -> StateReceiver {
        StateReceiver { receiver: self.sender.subscribe() }
    }

    /// Number of active receivers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for StateBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Receiver for published feed states.
pub struct StateReceiver {
    receiver: broadcast::Receiver<Arc<FeedState>>,
}

impl StateReceiver {
    /// Receive the next published state.
    ///
    /// Returns `None` once the session is gone and the buffer drained.
    /// Returns an error description when the receiver lagged.
    pub async fn recv(&mut self) -> Option<Result<Arc<FeedState>, String>> {
        match self.receiver.recv().await {
            Ok(state) => Some(Ok(state)),
            Err(broadcast::error::RecvError::Closed) => None,
            Err(broadcast::error::RecvError::Lagged(count)) => {
                Some(Err(format!("Receiver lagged, missed {} states", count)))
            }
        }
    }

    /// Try to receive a state without blocking.
    ///
    /// Returns `None` when no state is immediately available.
    pub fn try_recv(&mut self) -> Option<Result<Arc<FeedState>, String>> {
        match self.receiver.try_recv() {
            Ok(state) => Some(Ok(state)),
            Err(broadcast::error::TryRecvError::Empty) => None,
            Err(broadcast::error::TryRecvError::Closed) => None,
            Err(broadcast::error::TryRecvError::Lagged(count)) => {
                Some(Err(format!("Receiver lagged, missed {} states", count)))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
