//! One aggregation pass per render cycle.

use crate::collect::collect_view;
use crate::types::{StatView, ViewCache, ViewContext, ViewKind};
use matchday_eventlog::LogSnapshot;

/// Owns a snapshot, context, and memoization cache for one render cycle.
///
/// Consumers create a pass per published state and request the views they
/// need; shared prerequisites are computed once and reused across sibling
/// views. The pass borrows nothing from the live session, so it can be
/// used on any thread that received the published state.
#[derive(Debug)]
pub struct AggregationPass {
    log: LogSnapshot,
    ctx: ViewContext,
    cache: ViewCache,
}

impl AggregationPass {
    /// Start a pass over `log` with the given context.
    pub fn new(log: LogSnapshot, ctx: ViewContext) -> Self {
        Self { log, ctx, cache: ViewCache::new() }
    }

    /// Compute (or fetch from the pass cache) the requested view.
    pub fn view(&mut self, kind: ViewKind) -> StatView {
        collect_view(&self.log, kind, &mut self.cache, &self.ctx)
    }

    /// The snapshot this pass derives from.
    pub fn log(&self) -> &LogSnapshot {
        &self.log
    }

    /// The context this pass derives with.
    pub fn context(&self) -> &ViewContext {
        &self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_domain::Score;
    use matchday_eventlog::EventLog;
    use matchday_testkit::events::{goal_correction, match_created, shot_goal};

    #[test]
    fn test_pass_computes_consistent_sibling_views() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "home"));
        log.append(goal_correction("c1", "away"));

        let mut pass = AggregationPass::new(log.snapshot(), ViewContext::default());

        let score = pass.view(ViewKind::Score).into_score().unwrap();
        let goals = pass.view(ViewKind::Goals).into_goals();

        assert_eq!(score, Score { home: 1, away: 1 });
        assert_eq!(goals.last().unwrap().score, score);
    }
}
