//! Feed session: runtime orchestrator for one endpoint connection.
//!
//! The session loop exclusively owns the mutable working log, the debounce
//! state machines, and the clock sync. Deliveries arrive one at a time over
//! an mpsc channel, so mutations are never re-entrant; consumers only ever
//! observe immutable published snapshots.
//!
//! # Lifecycle
//!
//! 1. `FeedSession::connect` spawns the event source task and the loop
//! 2. Deliveries mutate the log and arm the flush/sync debounces
//! 3. Flush expiry publishes a snapshot covering the whole burst
//! 4. A 1 s tick republishes the extrapolated server time
//! 5. `FeedHandle::shutdown` cancels the source first, then the loop;
//!    nothing is published afterwards, even for an already-armed flush
//!
//! Changing endpoints means shutting this session down and connecting a
//! new one: the log is created empty per connection.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep_until, Instant as TokioInstant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use matchday_clock::ClockSync;
use matchday_eventlog::{EventLog, LogSnapshot};

use crate::config::{FeedConfig, CLOCK_TICK_INTERVAL, FLUSH_DELAY};
use crate::debounce::Debounce;
use crate::ingest;
use crate::ports::{EventSource, RawSourceEvent};
use crate::state_bus::{FeedState, StateBus, StateReceiver};

// =============================================================================
// Session
// =============================================================================

/// Entry point for connecting to an event stream endpoint.
pub struct FeedSession;

impl FeedSession {
    /// Connect to `endpoint` and start aggregating its events.
    ///
    /// Spawns the source task and the session loop; returns immediately
    /// with a handle for subscribing and teardown.
    pub fn connect<S>(endpoint: impl Into<String>, config: FeedConfig, source: S) -> FeedHandle
    where
        S: EventSource + 'static,
    {
        let endpoint = endpoint.into();
        let shutdown = CancellationToken::new();
        let bus = StateBus::default();
        let (tx, rx) = mpsc::channel(256);

        info!(
            endpoint = %endpoint,
            refresh_secs = config.refresh_interval.as_secs(),
            "Connecting feed session"
        );

        let source_task = {
            let endpoint = endpoint.clone();
            let token = shutdown.child_token();
            let refresh = config.refresh_interval;
            let mut source = source;
            tokio::spawn(async move {
                match source.run(&endpoint, refresh, tx, token).await {
                    Ok(()) => info!(endpoint = %endpoint, "Event source finished"),
                    Err(e) => error!(error = %e, endpoint = %endpoint, "Event source failed"),
                }
            })
        };

        let session_task = {
            let session = SessionLoop::new(endpoint.clone(), bus.clone(), shutdown.clone());
            tokio::spawn(session.run(rx))
        };

        FeedHandle {
            endpoint,
            config,
            bus,
            shutdown,
            session: session_task,
            source: source_task,
        }
    }
}

/// Handle to a running feed session.
pub struct FeedHandle {
    endpoint: String,
    config: FeedConfig,
    bus: StateBus,
    shutdown: CancellationToken,
    session: JoinHandle<()>,
    source: JoinHandle<()>,
}

impl FeedHandle {
    /// Subscribe to published feed states.
    pub fn subscribe(&self) -> StateReceiver {
        self.bus.subscribe()
    }

    /// The endpoint this session is connected to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> FeedConfig {
        self.config
    }

    /// Whether the session loop is still alive.
    pub fn is_running(&self) -> bool {
        !self.session.is_finished()
    }

    /// Graceful teardown: stop the event source first, then the loop.
    ///
    /// Pending flush and sync timers die with the loop; no state is
    /// published after this returns.
    pub async fn shutdown(mut self) {
        info!(endpoint = %self.endpoint, "Shutting down feed session");
        self.shutdown.cancel();

        if let Err(e) = (&mut self.source).await {
            if !e.is_cancelled() {
                warn!(error = %e, "Event source task ended abnormally");
            }
        }
        if let Err(e) = (&mut self.session).await {
            if !e.is_cancelled() {
                warn!(error = %e, "Session task ended abnormally");
            }
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        // A dropped handle must not leave a live session publishing
        self.shutdown.cancel();
    }
}

// =============================================================================
// Session loop
// =============================================================================

struct SessionLoop {
    endpoint: String,
    bus: StateBus,
    shutdown: CancellationToken,
    log: EventLog,
    flush: Debounce,
    flush_deadline: Option<TokioInstant>,
    sync: Debounce,
    sync_deadline: Option<TokioInstant>,
    pending_sync: Option<ClockSync>,
    clock: Option<ClockSync>,
    last_published_log: LogSnapshot,
}

impl SessionLoop {
    fn new(endpoint: String, bus: StateBus, shutdown: CancellationToken) -> Self {
        Self {
            endpoint,
            bus,
            shutdown,
            log: EventLog::new(),
            flush: Debounce::new(),
            flush_deadline: None,
            sync: Debounce::new(),
            sync_deadline: None,
            pending_sync: None,
            clock: None,
            last_published_log: LogSnapshot::empty(),
        }
    }

    async fn run(mut self, mut deliveries: mpsc::Receiver<RawSourceEvent>) {
        info!(endpoint = %self.endpoint, "Feed session loop started");

        let shutdown = self.shutdown.clone();
        let mut ticker = interval(CLOCK_TICK_INTERVAL);
        ticker.tick().await; // First tick is immediate
        let mut deliveries_open = true;

        loop {
            // Disabled timer branches still construct their futures;
            // hand them a harmless placeholder deadline
            let flush_at = self.flush_deadline.unwrap_or_else(TokioInstant::now);
            let sync_at = self.sync_deadline.unwrap_or_else(TokioInstant::now);

            tokio::select! {
                // Shutdown must win over any concurrently-ready timer so
                // nothing is published after teardown
                biased;

                _ = shutdown.cancelled() => {
                    self.flush.cancel();
                    self.sync.cancel();
                    break;
                }

                maybe = deliveries.recv(), if deliveries_open => match maybe {
                    Some(raw) => self.on_delivery(raw),
                    None => {
                        debug!(endpoint = %self.endpoint, "Delivery channel closed, source finished");
                        deliveries_open = false;
                    }
                },

                _ = sleep_until(flush_at), if self.flush.is_armed() => self.flush_log(),

                _ = sleep_until(sync_at), if self.sync.is_armed() => self.install_sync(),

                _ = ticker.tick() => self.tick(),
            }
        }

        info!(endpoint = %self.endpoint, events = self.log.len(), "Feed session loop stopped");
    }

    /// Handle one delivery from the event source.
    fn on_delivery(&mut self, raw: RawSourceEvent) {
        // Every delivery is a clock sample: keep the freshest pairing of
        // reported server time and local receipt instant
        self.pending_sync = Some(ClockSync::new(raw.source_time, Instant::now()));
        if self.sync.arm() {
            self.sync_deadline = Some(TokioInstant::now() + FLUSH_DELAY);
        }

        let Some(event) = ingest::normalize(&raw) else {
            return;
        };

        debug!(event_type = event.event_type(), "Applying event to log");
        ingest::apply(&mut self.log, event);
        if self.flush.arm() {
            self.flush_deadline = Some(TokioInstant::now() + FLUSH_DELAY);
        }
    }

    /// Flush expiry: publish one snapshot covering the whole burst.
    fn flush_log(&mut self) {
        if !self.flush.fire() {
            return;
        }
        self.flush_deadline = None;

        let snapshot = self.log.snapshot();
        self.last_published_log = snapshot.clone();
        self.publish(snapshot);
    }

    /// Sync expiry: install the pending clock sync, replacing the current
    /// one wholesale.
    fn install_sync(&mut self) {
        if !self.sync.fire() {
            return;
        }
        self.sync_deadline = None;

        if let Some(sync) = self.pending_sync.take() {
            self.clock = Some(sync);
        }
    }

    /// Periodic tick: republish with a freshly extrapolated server time.
    fn tick(&mut self) {
        // Nothing to extrapolate before the first sync; stay silent
        // rather than waking subscribers with an unknown clock
        if self.clock.is_none() {
            return;
        }
        self.publish(self.last_published_log.clone());
    }

    fn publish(&self, event_log: LogSnapshot) {
        let state = Arc::new(FeedState { event_log, server_time: self.server_time() });
        let receivers = self.bus.publish(state);
        debug!(receivers, "Published feed state");
    }

    fn server_time(&self) -> Option<DateTime<Utc>> {
        self.clock.as_ref().map(|sync| sync.server_time_at(Instant::now()))
    }
}
