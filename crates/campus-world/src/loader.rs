//! CSV loaders for the room and agent tables.
//!
//! # Room table
//!
//! One row per room; buildings are implied by the `building_name` column:
//!
//! ```csv
//! room_name,building_name,building_type,connected_to,travel_time,capacity,kv
//! dorm_a_hub,dorm_a,dorm,transit_space_hub,2,0,0.0
//! dorm_a_101,dorm_a,dorm,dorm_a_hub,1,4,1.0
//! transit_space_hub,transit_space,transit,,0,0,1.0
//! ```
//!
//! `connected_to` names one neighbor (empty for none); the builder inserts
//! edges symmetrically.  A name ending in `_hub` marks the room as a hub.
//!
//! # Agent table
//!
//! One row per cohort, expanded to `count` agents at build:
//!
//! ```csv
//! archetype,agent_type,initial_location,count
//! student,onCampus,dorm,1500
//! student,offCampus,offCampus_apartments,500
//! faculty,faculty,offCampus_apartments,250
//! ```

use std::io::Read;
use std::path::Path;

use crate::builder::{AgentSpec, RoomSpec};
use crate::WorldResult;

/// Load the room table from a CSV file.
pub fn load_world_csv(path: &Path) -> WorldResult<Vec<RoomSpec>> {
    let file = std::fs::File::open(path)?;
    load_rooms_reader(file)
}

/// Like [`load_world_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_rooms_reader<R: Read>(reader: R) -> WorldResult<Vec<RoomSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut specs = Vec::new();
    for result in csv_reader.deserialize::<RoomSpec>() {
        let spec = result.map_err(|e| crate::WorldError::Parse(e.to_string()))?;
        specs.push(spec);
    }
    Ok(specs)
}

/// Load the agent cohort table from a CSV file.
pub fn load_agents_csv(path: &Path) -> WorldResult<Vec<AgentSpec>> {
    let file = std::fs::File::open(path)?;
    load_agents_reader(file)
}

/// Like [`load_agents_csv`] but accepts any `Read` source.
pub fn load_agents_reader<R: Read>(reader: R) -> WorldResult<Vec<AgentSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut specs = Vec::new();
    for result in csv_reader.deserialize::<AgentSpec>() {
        let spec = result.map_err(|e| crate::WorldError::Parse(e.to_string()))?;
        specs.push(spec);
    }
    Ok(specs)
}
