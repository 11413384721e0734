//! Top-level simulation error: configuration failures plus everything the
//! component crates can raise during assembly.

use thiserror::Error;

use campus_disease::DiseaseError;
use campus_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Disease(#[from] DiseaseError),
}

pub type SimResult<T> = Result<T, SimError>;
