//! Event source port definition.
//!
//! The port is the boundary to the transport that discovers events
//! (polling, push, replay). Adapters implement it for specific sources;
//! the testkit ships `ScriptedSource` for tests. Each delivery pairs a
//! labelled payload with the source-reported timestamp, which is what the
//! clock synchronizer feeds on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::FeedResult;

/// One event as delivered by the source, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSourceEvent {
    /// Wire label (e.g. "shot", "goalCorrection")
    pub event_type: String,
    /// Label-specific payload
    pub payload: serde_json::Value,
    /// Source-reported timestamp for this delivery
    pub source_time: DateTime<Utc>,
}

/// Port for event delivery from a remote stream.
///
/// Implementations:
/// - `ScriptedSource` (testkit) - replays a fixed delivery sequence
/// - polling/push adapters for real endpoints live outside this workspace
#[async_trait]
pub trait EventSource: Send {
    /// Deliver events for `endpoint` into `tx` until the stream is
    /// exhausted or `shutdown` is cancelled.
    ///
    /// Deliveries must be sent one at a time in source order; the session
    /// applies them in arrival order without reordering. `refresh_interval`
    /// is the polling cadence for pull-based sources; push-based sources
    /// may ignore it.
    async fn run(
        &mut self,
        endpoint: &str,
        refresh_interval: Duration,
        tx: mpsc::Sender<RawSourceEvent>,
        shutdown: CancellationToken,
    ) -> FeedResult<()>;
}
