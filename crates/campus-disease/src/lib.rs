//! `campus-disease` — the per-agent disease state machine.
//!
//! # Design
//!
//! Disease progression is a probabilistic finite-state machine over
//! [`DiseaseState`](campus_core::DiseaseState).  Each state carries a
//! minimum dwell time and an ordered piecewise CDF over its successor
//! states; once the dwell has elapsed the next state is sampled with a
//! single uniform draw.
//!
//! [`DiseaseModel`] owns a per-state index of agent ids that mirrors each
//! agent's own `state` field.  [`DiseaseModel::change_state`] is the sole
//! mutator of either side, which keeps the two consistent by construction.
//!
//! # Crate layout
//!
//! | Module    | Contents                                               |
//! |-----------|--------------------------------------------------------|
//! | [`table`] | `Transition`, `TransitionTable` (dwell + CDF per state)|
//! | [`model`] | `DiseaseModel` (index, change_state, timer pass)       |
//! | [`error`] | `DiseaseError`, `DiseaseResult<T>`                     |

pub mod error;
pub mod model;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{DiseaseError, DiseaseResult};
pub use model::DiseaseModel;
pub use table::{Transition, TransitionTable};
