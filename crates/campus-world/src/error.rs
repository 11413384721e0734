//! Error type for world construction, lookups, and occupancy checks.

use thiserror::Error;

use campus_core::CoreError;
use campus_schedule::ScheduleError;

#[derive(Debug, Error)]
pub enum WorldError {
    /// A table or config referenced a room name that does not exist.
    /// Always fatal — world data with dangling references is rejected.
    #[error("unknown room {0:?}")]
    UnknownRoom(String),

    #[error("unknown building {0:?}")]
    UnknownBuilding(String),

    #[error("no free capacity placing agents at {0:?}")]
    NoCapacity(String),

    #[error("room/agent occupancy out of sync: {0}")]
    OccupancyDrift(String),

    #[error("world parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Kind(#[from] CoreError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
