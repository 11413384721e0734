//! `campus-infection` — the force-of-infection model.
//!
//! # Design
//!
//! Transmission is always mediated by shared-room occupancy.  Each pass
//! computes a per-room **force**: the probability that one susceptible
//! occupant becomes exposed this pass.  Occupant contributions are summed
//! per-state infectivity weights, scaled down for mask wearers where the
//! mask policy applies, then normalized by a room-shape denominator:
//!
//! - ordinary room: `base_p * kv * contribution / limit`
//! - social leaf room: `base_p * 2 * contribution / (5 * (occ/5 + 1))`
//!
//! The **leaf pass** runs once per awake hour over leaf rooms; the **hub
//! pass** runs the ordinary formula over hub rooms after each of the four
//! movement sub-steps.  Off-campus rooms never transmit.  Two
//! supplementary passes cover contacts the room model misses: pairwise
//! faculty office hours and weekly large gatherings.
//!
//! Draws are consumed in room-ascending, occupant-ascending order, one per
//! susceptible per pass, so a fixed seed reproduces a run exactly.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`config`] | `EpiConfig`, `GatheringSpec`                          |
//! | [`model`]  | `InfectionModel` (force computation and all passes)   |

pub mod config;
pub mod model;

#[cfg(test)]
mod tests;

pub use config::{EpiConfig, GatheringSpec};
pub use model::InfectionModel;
