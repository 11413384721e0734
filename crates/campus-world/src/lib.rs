//! `campus-world` — the static world: rooms, buildings, topology, agents.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`room`]     | `Room`, `Building`                                       |
//! | [`agent`]    | `Agent` (fixed-field record, one per person)             |
//! | [`topology`] | `Topology` (room adjacency + travel times)               |
//! | [`world`]    | `World` (rooms + buildings + lookups + occupancy ops)    |
//! | [`loader`]   | CSV loaders for the room and agent tables                |
//! | [`builder`]  | `WorldBuilder` — tables in, validated `World` out        |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                           |
//!
//! # Hub convention
//!
//! A room whose name ends in `_hub` is an aggregation point between a
//! building's interior rooms and the transit network.  Hubs are excluded
//! from destination selection and from capacity checks, and run their own
//! infection pass timed to the movement sub-steps.

pub mod agent;
pub mod builder;
pub mod error;
pub mod loader;
pub mod room;
pub mod topology;
pub mod world;


pub use agent::Agent;
pub use builder::{AgentSpec, RoomSpec, WorldBuilder};
pub use error::{WorldError, WorldResult};
pub use loader::{load_agents_csv, load_agents_reader, load_rooms_reader, load_world_csv};
pub use room::{Building, Room, HUB_SUFFIX};
pub use topology::Topology;
pub use world::World;
