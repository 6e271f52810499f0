//! Period classification and elapsed time.
//!
//! INVARIANT: Ended dominates Started dominates NotStarted, regardless of
//! the order start/end events arrived in. Elapsed time is derived from the
//! synchronized server clock against the first PeriodStart instant for the
//! slot, clamped at zero, and omitted entirely while no clock sync exists.

use crate::types::ViewContext;
use chrono::{DateTime, Utc};
use matchday_domain::{MatchEvent, PeriodPhase, PeriodStatus};
use matchday_eventlog::LogSnapshot;
use std::time::Duration;

pub(crate) fn collect(log: &LogSnapshot, ctx: &ViewContext) -> Vec<PeriodStatus> {
    (1..=ctx.period_count).map(|period| status_of(log, period, ctx.server_time)).collect()
}

fn status_of(log: &LogSnapshot, period: u8, server_time: Option<DateTime<Utc>>) -> PeriodStatus {
    let mut started_on: Option<DateTime<Utc>> = None;
    let mut ended = false;

    for event in log.iter() {
        match event {
            MatchEvent::PeriodStart { period: p, occurred_on } if p.get() == period => {
                // First start in log order provides the reference instant
                started_on.get_or_insert(*occurred_on);
            }
            MatchEvent::PeriodEnd { period: p } if p.get() == period => ended = true,
            _ => {}
        }
    }

    let phase = if ended {
        PeriodPhase::Ended
    } else if started_on.is_some() {
        PeriodPhase::Started
    } else {
        PeriodPhase::NotStarted
    };

    let elapsed = match (phase, started_on, server_time) {
        (PeriodPhase::Started, Some(started), Some(now)) => {
            Some((now - started).to_std().unwrap_or(Duration::ZERO))
        }
        _ => None,
    };

    PeriodStatus { period, phase, elapsed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use matchday_eventlog::EventLog;
    use matchday_testkit::events::{period_end, period_start_at};

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 12, 14, 30, 0).unwrap()
    }

    fn ctx_at(server_time: DateTime<Utc>) -> ViewContext {
        ViewContext::new(2).with_server_time(server_time)
    }

    #[test]
    fn test_not_started_by_default() {
        let log = EventLog::new();
        let periods = collect(&log.snapshot(), &ViewContext::default());

        assert_eq!(periods.len(), 2);
        assert!(periods.iter().all(|p| p.phase == PeriodPhase::NotStarted && p.elapsed.is_none()));
    }

    #[test]
    fn test_started_with_elapsed() {
        let mut log = EventLog::new();
        log.append(period_start_at(1, kickoff()));

        let ctx = ctx_at(kickoff() + chrono::Duration::seconds(600));
        let periods = collect(&log.snapshot(), &ctx);

        assert_eq!(periods[0].phase, PeriodPhase::Started);
        assert_eq!(periods[0].elapsed, Some(Duration::from_secs(600)));
        assert_eq!(periods[1].phase, PeriodPhase::NotStarted);
    }

    #[test]
    fn test_elapsed_omitted_without_server_time() {
        let mut log = EventLog::new();
        log.append(period_start_at(1, kickoff()));

        let periods = collect(&log.snapshot(), &ViewContext::default());

        assert_eq!(periods[0].phase, PeriodPhase::Started);
        assert!(periods[0].elapsed.is_none());
    }

    #[test]
    fn test_elapsed_clamped_at_zero() {
        let mut log = EventLog::new();
        log.append(period_start_at(1, kickoff()));

        // Server clock behind the reported start: never negative
        let ctx = ctx_at(kickoff() - chrono::Duration::seconds(30));
        let periods = collect(&log.snapshot(), &ctx);

        assert_eq!(periods[0].elapsed, Some(Duration::ZERO));
    }

    #[test]
    fn test_end_dominates_regardless_of_order() {
        let mut log = EventLog::new();
        log.append(period_end(1));
        log.append(period_start_at(1, kickoff()));

        let ctx = ctx_at(kickoff() + chrono::Duration::seconds(60));
        let periods = collect(&log.snapshot(), &ctx);

        assert_eq!(periods[0].phase, PeriodPhase::Ended);
        assert!(periods[0].elapsed.is_none());
    }

    #[test]
    fn test_end_without_start_is_ended() {
        let mut log = EventLog::new();
        log.append(period_end(2));

        let periods = collect(&log.snapshot(), &ViewContext::default());
        assert_eq!(periods[1].phase, PeriodPhase::Ended);
    }

    #[test]
    fn test_first_start_wins_for_elapsed() {
        let mut log = EventLog::new();
        log.append(period_start_at(1, kickoff()));
        log.append(period_start_at(1, kickoff() + chrono::Duration::seconds(300)));

        let ctx = ctx_at(kickoff() + chrono::Duration::seconds(600));
        let periods = collect(&log.snapshot(), &ctx);

        assert_eq!(periods[0].elapsed, Some(Duration::from_secs(600)));
    }

    #[test]
    fn test_configurable_period_count() {
        let mut log = EventLog::new();
        log.append(period_start_at(3, kickoff()));

        let ctx = ViewContext::new(4);
        let periods = collect(&log.snapshot(), &ctx);

        assert_eq!(periods.len(), 4);
        assert_eq!(periods[2].phase, PeriodPhase::Started);
    }
}
