//! Test helpers for matchday crates.
//!
//! Provides domain event fixtures, raw wire-payload builders in the
//! source's vocabulary, and a scripted event source for end-to-end
//! session tests.

#![warn(clippy::all)]

pub mod events;
mod scripted;
pub mod wire;

pub use scripted::ScriptedSource;
pub use wire::fresh_id;
