//! Matchday Stats Aggregator
//!
//! The read side of the live feed: pure derivations over immutable event
//! log snapshots, producing the named views presentation surfaces render
//! (match identity, score, periods, goal timeline, substitutions, shots,
//! raw log).
//!
//! Each derivation filters a snapshot, never mutates it, and absorbs
//! missing data into neutral results: an undefined match identity makes
//! team-attributed views empty instead of raising errors. A `ViewCache`
//! memoizes per-pass prerequisites so sibling views share work.

#![warn(clippy::all)]

pub mod collect;
mod handlers;
pub mod pass;
pub mod types;

pub use collect::collect_view;
pub use pass::AggregationPass;
pub use types::{
    GoalEntry, GoalKind, ShotRecord, StatView, SubstitutionEntry, ViewCache, ViewContext, ViewKind,
};
