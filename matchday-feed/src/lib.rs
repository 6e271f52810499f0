//! Matchday Feed
//!
//! Live feed session for a sporting event stream.
//!
//! # Architecture
//!
//! ```text
//! EventSource → ingestion (normalize/classify) → EventLog
//!                                                   │ debounced flush
//!                                                   ▼
//!                  clock tick ───────────────→ StateBus ──→ subscribers
//!                  (extrapolated server time)
//! ```
//!
//! # Components
//!
//! - **FeedSession / FeedHandle**: connection lifecycle and teardown
//! - **EventSource**: port to the transport that discovers events
//! - **Ingestion**: wire payloads → domain events, append/retract
//! - **Debounce**: leading-edge coalescing of bursts into one flush
//! - **StateBus**: fan-out of immutable published states
//! - **FeedConfig**: refresh interval and period count, env-loadable
//!
//! # Example
//!
//! ```rust,ignore
//! use matchday_feed::{FeedConfig, FeedSession};
//!
//! let handle = FeedSession::connect(endpoint_url, FeedConfig::default(), source);
//! let mut states = handle.subscribe();
//! while let Some(Ok(state)) = states.recv().await {
//!     // derive views with matchday-stats
//! }
//! handle.shutdown().await;
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod debounce;
pub mod error;
pub mod ingest;
pub mod ports;
pub mod session;
pub mod state_bus;

// Re-exports for convenience
pub use config::{FeedConfig, CLOCK_TICK_INTERVAL, FLUSH_DELAY};
pub use debounce::Debounce;
pub use error::{FeedError, FeedResult};
pub use ports::{EventSource, RawSourceEvent};
pub use session::{FeedHandle, FeedSession};
pub use state_bus::{FeedState, StateBus, StateReceiver};
