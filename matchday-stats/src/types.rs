//! View types produced by the stats derivations.

use chrono::{DateTime, Utc};
use matchday_domain::{MatchSummary, PeriodStatus, Person, Score, ShotResult, Team, TeamSide};
use matchday_domain::{EventId, TeamId};
use matchday_eventlog::LogSnapshot;
use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// View kinds
// =============================================================================

/// Named statistical views a consumer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    /// Match identity (teams, scheduled kick-off)
    Match,
    /// Current score
    Score,
    /// Per-period phase and elapsed time
    Periods,
    /// Goal timeline with running score
    Goals,
    /// Substitution list
    Substitutions,
    /// All shots, any result
    Shots,
    /// The full log snapshot, order-preserved
    Raw,
}

// =============================================================================
// View payloads
// =============================================================================

/// How a goal entered the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalKind {
    /// A shot with a `Goal` result
    Shot,
    /// A goal awarded by correction
    Correction,
}

/// One entry in the goal timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEntry {
    /// Source id of the scoring event
    pub id: EventId,
    /// Team credited with the goal
    pub team: Team,
    /// Side of the match the goal counts for
    pub side: TeamSide,
    /// When the goal occurred
    pub time: DateTime<Utc>,
    /// Scorer, when the goal came from a shot
    pub scorer: Option<Person>,
    /// Shot or correction
    pub kind: GoalKind,
    /// Cumulative score as of and including this goal
    pub score: Score,
}

/// One entry in the substitution list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionEntry {
    /// Source id of the substitution event
    pub id: EventId,
    /// Team making the change
    pub team: Team,
    /// Side of the match the team plays on
    pub side: TeamSide,
    /// When the substitution occurred
    pub time: DateTime<Utc>,
    /// Player coming on
    pub player_in: Person,
    /// Player going off
    pub player_out: Person,
}

/// One entry in the shot list (unfiltered by result).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    /// Source id of the shot event
    pub id: EventId,
    /// Team the shot is attributed to
    pub team_id: TeamId,
    /// When the shot occurred
    pub time: DateTime<Utc>,
    /// Player who took the shot
    pub shooter: Person,
    /// Outcome
    pub result: ShotResult,
    /// Free-form shot classification from the source
    pub shot_type: Option<String>,
}

/// Result of one view derivation.
///
/// Missing prerequisites surface as neutral values (`None` / empty vec),
/// never as errors: an aggregation pass always completes.
#[derive(Debug, Clone)]
pub enum StatView {
    /// Match identity; `None` when zero or multiple MatchCreated events exist
    Match(Option<MatchSummary>),
    /// Score; `None` when match identity is undefined
    Score(Option<Score>),
    /// One status per configured period slot
    Periods(Vec<PeriodStatus>),
    /// Goal timeline; empty when match identity is undefined
    Goals(Vec<GoalEntry>),
    /// Substitutions; empty when match identity is undefined
    Substitutions(Vec<SubstitutionEntry>),
    /// All shots in log order
    Shots(Vec<ShotRecord>),
    /// The snapshot itself
    Raw(LogSnapshot),
}

impl StatView {
    /// The kind of view this value is.
    pub fn kind(&self) -> ViewKind {
        match self {
            StatView::Match(_) => ViewKind::Match,
            StatView::Score(_) => ViewKind::Score,
            StatView::Periods(_) => ViewKind::Periods,
            StatView::Goals(_) => ViewKind::Goals,
            StatView::Substitutions(_) => ViewKind::Substitutions,
            StatView::Shots(_) => ViewKind::Shots,
            StatView::Raw(_) => ViewKind::Raw,
        }
    }

    /// Extract the match summary, if this is a `Match` view.
    pub fn into_match(self) -> Option<MatchSummary> {
        match self {
            StatView::Match(summary) => summary,
            _ => None,
        }
    }

    /// Extract the score, if this is a `Score` view.
    pub fn into_score(self) -> Option<Score> {
        match self {
            StatView::Score(score) => score,
            _ => None,
        }
    }

    /// Extract the period statuses, if this is a `Periods` view.
    pub fn into_periods(self) -> Vec<PeriodStatus> {
        match self {
            StatView::Periods(periods) => periods,
            _ => Vec::new(),
        }
    }

    /// Extract the goal timeline, if this is a `Goals` view.
    pub fn into_goals(self) -> Vec<GoalEntry> {
        match self {
            StatView::Goals(goals) => goals,
            _ => Vec::new(),
        }
    }

    /// Extract the substitution list, if this is a `Substitutions` view.
    pub fn into_substitutions(self) -> Vec<SubstitutionEntry> {
        match self {
            StatView::Substitutions(subs) => subs,
            _ => Vec::new(),
        }
    }

    /// Extract the shot list, if this is a `Shots` view.
    pub fn into_shots(self) -> Vec<ShotRecord> {
        match self {
            StatView::Shots(shots) => shots,
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// Context & cache
// =============================================================================

/// Inputs shared by every derivation in one aggregation pass.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    /// Synchronized server time, when a clock sync exists
    pub server_time: Option<DateTime<Utc>>,
    /// Number of configured period slots
    pub period_count: u8,
}

impl ViewContext {
    /// Context with an unknown server time and the given period count.
    pub fn new(period_count: u8) -> Self {
        Self { server_time: None, period_count }
    }

    /// Attach a synchronized server time.
    pub fn with_server_time(mut self, server_time: DateTime<Utc>) -> Self {
        self.server_time = Some(server_time);
        self
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Memoization table for one aggregation pass, keyed by view kind.
///
/// Sibling derivations reuse prerequisites (principally `Match`) through
/// this cache instead of recomputing them. Build a fresh cache per
/// snapshot; entries are only valid for the snapshot they were computed
/// from.
#[derive(Debug, Default)]
pub struct ViewCache {
    views: HashMap<ViewKind, StatView>,
}

impl ViewCache {
    /// An empty cache for a new pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously computed view.
    pub fn get(&self, kind: ViewKind) -> Option<&StatView> {
        self.views.get(&kind)
    }

    /// Record a computed view.
    pub fn insert(&mut self, view: StatView) {
        self.views.insert(view.kind(), view);
    }

    /// Number of memoized views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether the cache holds no views yet.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keyed_by_kind() {
        let mut cache = ViewCache::new();
        assert!(cache.is_empty());

        cache.insert(StatView::Score(Some(Score { home: 1, away: 0 })));
        cache.insert(StatView::Score(Some(Score { home: 2, away: 0 })));

        assert_eq!(cache.len(), 1);
        let score = cache.get(ViewKind::Score).cloned().unwrap().into_score();
        assert_eq!(score, Some(Score { home: 2, away: 0 }));
    }

    #[test]
    fn test_view_kind_roundtrip() {
        let view = StatView::Goals(Vec::new());
        assert_eq!(view.kind(), ViewKind::Goals);
        assert!(view.into_goals().is_empty());
    }
}
