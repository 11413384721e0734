//! `campus-core` — foundational types for the `campus_abm` epidemic simulator.
//!
//! This crate is a dependency of every other `campus-*` crate.  It
//! intentionally has no `campus-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `RoomId`, `BuildingId`                     |
//! | [`time`]   | `Tick`, `DayKind`, `SimClock`, `SimConfig`            |
//! | [`rng`]    | `SimRng` (single process-wide stream)                 |
//! | [`state`]  | `DiseaseState` enum                                   |
//! | [`kinds`]  | `BuildingKind`, `Archetype`, `AgentKind`, `Motion`    |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod error;
pub mod ids;
pub mod kinds;
pub mod rng;
pub mod state;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, BuildingId, RoomId};
pub use kinds::{AgentKind, Archetype, BuildingKind, Motion};
pub use rng::SimRng;
pub use state::DiseaseState;
pub use time::{DayKind, SimClock, SimConfig, Tick, HOURS_PER_DAY, TICKS_PER_WEEK};
