//! View dispatcher for stats derivations.
//!
//! Routes a requested view kind to its handler, memoizing results in the
//! pass cache so sibling views reuse shared prerequisites (principally
//! match identity) instead of recomputing them.

use crate::handlers;
use crate::types::{StatView, ViewCache, ViewContext, ViewKind};
use matchday_domain::MatchSummary;
use matchday_eventlog::LogSnapshot;

/// Compute one named view over a log snapshot.
///
/// Pure in the snapshot and context; the cache only memoizes. Derivations
/// never fail: missing prerequisites yield the view's neutral empty form.
pub fn collect_view(
    log: &LogSnapshot,
    kind: ViewKind,
    cache: &mut ViewCache,
    ctx: &ViewContext,
) -> StatView {
    if let Some(view) = cache.get(kind) {
        return view.clone();
    }

    let view = match kind {
        ViewKind::Match => StatView::Match(handlers::match_info::collect(log)),
        ViewKind::Score => {
            let summary = prerequisite_match(log, cache, ctx);
            StatView::Score(handlers::score::collect(log, summary.as_ref()))
        }
        ViewKind::Periods => StatView::Periods(handlers::periods::collect(log, ctx)),
        ViewKind::Goals => {
            let summary = prerequisite_match(log, cache, ctx);
            StatView::Goals(handlers::goals::collect(log, summary.as_ref()))
        }
        ViewKind::Substitutions => {
            let summary = prerequisite_match(log, cache, ctx);
            StatView::Substitutions(handlers::substitutions::collect(log, summary.as_ref()))
        }
        ViewKind::Shots => StatView::Shots(handlers::shots::collect(log)),
        ViewKind::Raw => StatView::Raw(log.clone()),
    };

    cache.insert(view.clone());
    view
}

/// Match identity via the cache, computed at most once per pass.
fn prerequisite_match(
    log: &LogSnapshot,
    cache: &mut ViewCache,
    ctx: &ViewContext,
) -> Option<MatchSummary> {
    collect_view(log, ViewKind::Match, cache, ctx).into_match()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_domain::Score;
    use matchday_eventlog::EventLog;
    use matchday_testkit::events::{match_created, shot_goal};

    #[test]
    fn test_dispatch_each_kind() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "home"));

        let snapshot = log.snapshot();
        let ctx = ViewContext::default();
        let mut cache = ViewCache::new();

        let score = collect_view(&snapshot, ViewKind::Score, &mut cache, &ctx).into_score();
        assert_eq!(score, Some(Score { home: 1, away: 0 }));

        let raw = collect_view(&snapshot, ViewKind::Raw, &mut cache, &ctx);
        match raw {
            StatView::Raw(view) => assert_eq!(view.len(), 2),
            other => panic!("Expected raw view, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_prerequisite_match_memoized_across_siblings() {
        let mut log = EventLog::new();
        log.append(match_created("home", "away"));
        log.append(shot_goal("s1", "home"));

        let snapshot = log.snapshot();
        let ctx = ViewContext::default();
        let mut cache = ViewCache::new();

        collect_view(&snapshot, ViewKind::Score, &mut cache, &ctx);
        // Score pulled Match into the cache alongside itself
        assert!(cache.get(ViewKind::Match).is_some());
        assert_eq!(cache.len(), 2);

        collect_view(&snapshot, ViewKind::Goals, &mut cache, &ctx);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_cached_view_returned_as_is() {
        let snapshot = EventLog::new().snapshot();
        let ctx = ViewContext::default();
        let mut cache = ViewCache::new();

        // Seed the cache with a fabricated score; dispatch must not recompute
        cache.insert(StatView::Score(Some(Score { home: 9, away: 9 })));
        let score = collect_view(&snapshot, ViewKind::Score, &mut cache, &ctx).into_score();
        assert_eq!(score, Some(Score { home: 9, away: 9 }));
    }
}
