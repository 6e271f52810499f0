//! Feed configuration.
//!
//! Loads configuration from environment variables with sensible defaults,
//! or takes explicit values from the caller. The refresh interval is
//! clamped into the range the upstream service tolerates.

use crate::error::{FeedError, FeedResult};
use std::env;
use std::time::Duration;

/// Delay between the first log mutation of a burst and the snapshot flush
/// covering the whole burst.
pub const FLUSH_DELAY: Duration = Duration::from_millis(10);

/// Cadence of the live clock tick that republishes the extrapolated
/// server time while a clock sync exists.
pub const CLOCK_TICK_INTERVAL: Duration = Duration::from_secs(1);

const MIN_REFRESH_SECS: u64 = 5;
const MAX_REFRESH_SECS: u64 = 120;
const DEFAULT_REFRESH_SECS: u64 = 5;
const DEFAULT_PERIOD_COUNT: u8 = 2;

// =============================================================================
// Configuration
// =============================================================================

/// Feed session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    /// Polling interval handed to the event source
    pub refresh_interval: Duration,

    /// Number of period slots the stats views report
    pub period_count: u8,
}

impl FeedConfig {
    /// Create a configuration from explicit values.
    ///
    /// `refresh_secs` is clamped into [5, 120] seconds; `period_count`
    /// has a floor of 1.
    pub fn new(refresh_secs: u64, period_count: u8) -> Self {
        Self {
            refresh_interval: Duration::from_secs(
                refresh_secs.clamp(MIN_REFRESH_SECS, MAX_REFRESH_SECS),
            ),
            period_count: period_count.max(1),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `MATCHDAY_REFRESH_INTERVAL`: polling interval in seconds
    /// - `MATCHDAY_PERIOD_COUNT`: number of period slots
    pub fn from_env() -> FeedResult<Self> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let refresh_secs = Self::load_u64_env("MATCHDAY_REFRESH_INTERVAL", DEFAULT_REFRESH_SECS)?;
        let period_count = Self::load_u8_env("MATCHDAY_PERIOD_COUNT", DEFAULT_PERIOD_COUNT)?;

        Ok(Self::new(refresh_secs, period_count))
    }

    fn load_u64_env(key: &str, default: u64) -> FeedResult<u64> {
        match env::var(key) {
            Ok(val) => val
                .parse::<u64>()
                .map_err(|_| FeedError::Config(format!("Invalid {} value: {}", key, val))),
            Err(_) => Ok(default),
        }
    }

    fn load_u8_env(key: &str, default: u8) -> FeedResult<u8> {
        match env::var(key) {
            Ok(val) => val
                .parse::<u8>()
                .map_err(|_| FeedError::Config(format!("Invalid {} value: {}", key, val))),
            Err(_) => Ok(default),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_SECS, DEFAULT_PERIOD_COUNT)
    }
}

// =============================================================================
// Tests
// =============================================================================
