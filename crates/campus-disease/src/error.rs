//! Error type for transition-table validation and index verification.

use thiserror::Error;

use campus_core::DiseaseState;

#[derive(Debug, Error)]
pub enum DiseaseError {
    /// A transition CDF is malformed (final bound not 1, bound out of
    /// range, or non-monotone).  Raised at validation time, always fatal.
    #[error("invalid transition CDF for {state:?}: {reason}")]
    InvalidCdf { state: DiseaseState, reason: String },

    /// The per-state index disagrees with an agent's own `state` field.
    /// Indicates a mutation that bypassed `change_state`.
    #[error("state index drift: {0}")]
    IndexDrift(String),
}

pub type DiseaseResult<T> = Result<T, DiseaseError>;
