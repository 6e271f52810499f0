//! Matchday Clock Layer
//!
//! Pure clock synchronization logic, deterministic, no I/O.
//!
//! The event source reports absolute time sparsely (once per delivered
//! event), while period-elapsed views want a continuously advancing match
//! clock. `ClockSync` captures the pairing of a reported server instant
//! with the local monotonic instant it arrived at, and extrapolates the
//! current server time from the local delta.
//!
//! The local reference is `std::time::Instant`: monotonic by contract and
//! immune to wall-clock adjustments, which the offset calculation depends
//! on. Sync state is replaced wholesale on every sync, never merged, and
//! it never leaves the process.

#![warn(clippy::all)]

use chrono::{DateTime, Utc};
use std::time::Instant;

/// One recorded synchronization point between server time and local
/// monotonic time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSync {
    server_time_at_sync: DateTime<Utc>,
    local_at_sync: Instant,
}

impl ClockSync {
    /// Record a sync point: the source reported `server_time` and the
    /// local monotonic clock read `local_now` when it arrived.
    pub fn new(server_time: DateTime<Utc>, local_now: Instant) -> Self {
        Self { server_time_at_sync: server_time, local_at_sync: local_now }
    }

    /// Extrapolate the server time as of `local_now`.
    ///
    /// `server_time_at_sync + (local_now - local_at_sync)`. Taking the
    /// local instant as an argument keeps this a pure function; callers
    /// pass `Instant::now()` in production and fabricated instants in
    /// tests.
    pub fn server_time_at(&self, local_now: Instant) -> DateTime<Utc> {
        let elapsed = local_now.saturating_duration_since(self.local_at_sync);
        // from_std only fails for spans around 2^63 ms, far beyond any
        // process lifetime
        let elapsed = chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());
        self.server_time_at_sync + elapsed
    }

    /// The server instant this sync was recorded at.
    pub fn server_time_at_sync(&self) -> DateTime<Utc> {
        self.server_time_at_sync
    }

    /// The local monotonic instant this sync was recorded at.
    pub fn local_at_sync(&self) -> Instant {
        self.local_at_sync
    }
}

// =============================================================================
// Tests
// =============================================================================
