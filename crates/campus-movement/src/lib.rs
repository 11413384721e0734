//! `campus-movement` — the per-agent movement automaton.
//!
//! # Design
//!
//! Each agent is a two-state machine over [`Motion`](campus_core::Motion):
//!
//! - **Stationary**: look up the schedule entry for (day kind, hour) and,
//!   if it differs from the current room, plan a route and start moving.
//! - **Moving**: once the pending hop's travel time has elapsed, pop the
//!   next hop and relocate.
//!
//! Routing is deliberately not shortest-path: a cross-building journey is
//! always `room → own hub → transit hub → destination hub → destination`,
//! exactly one transit hub, at most three pending hops after planning.
//! A same-building journey is the single hop `room → destination`.
//!
//! The caller drives four sub-steps per awake hour, so a cross-building
//! journey completes within one hour when all travel times are short.

pub mod automaton;

#[cfg(test)]
mod tests;

pub use automaton::MovementAutomaton;
