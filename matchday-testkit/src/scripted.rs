//! Scripted event source for session tests.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use matchday_feed::{EventSource, FeedError, FeedResult, RawSourceEvent};

/// An `EventSource` that replays a fixed delivery sequence and finishes.
///
/// Deliveries are sent back-to-back by default; `with_delay` inserts a
/// pause between consecutive deliveries so tests can step across
/// coalescing windows.
pub struct ScriptedSource {
    events: Vec<RawSourceEvent>,
    delay: Option<Duration>,
}

impl ScriptedSource {
    /// Replay the given deliveries in order.
    pub fn new(events: Vec<RawSourceEvent>) -> Self {
        Self { events, delay: None }
    }

    /// Pause between consecutive deliveries.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl EventSource for ScriptedSource {
    async fn run(
        &mut self,
        _endpoint: &str,
        _refresh_interval: Duration,
        tx: mpsc::Sender<RawSourceEvent>,
        shutdown: CancellationToken,
    ) -> FeedResult<()> {
        let events = std::mem::take(&mut self.events);

        for (index, event) in events.into_iter().enumerate() {
            if index > 0 {
                if let Some(delay) = self.delay {
                    tokio::select! {
                        _ = shutdown.cancelled() => return Ok(()),
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
            }

            tokio::select! {
                _ = shutdown.cancelled() => return Ok(()),
                sent = tx.send(event) => {
                    sent.map_err(|_| FeedError::ChannelClosed)?;
                }
            }
        }

        Ok(())
    }
}
