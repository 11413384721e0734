//! The `World`: rooms, buildings, topology, and occupancy operations.

use rustc_hash::FxHashMap;

use campus_core::{AgentId, BuildingId, BuildingKind, RoomId};

use crate::agent::Agent;
use crate::room::{Building, Room};
use crate::topology::Topology;
use crate::{WorldError, WorldResult};

/// The static world plus the mutable occupancy state layered on it.
///
/// Topology and the room/building tables are immutable after
/// [`WorldBuilder::build`](crate::WorldBuilder::build); occupancy sets,
/// per-room infection counters, and `kv` (closures) mutate during a run.
#[derive(Debug)]
pub struct World {
    pub rooms: Vec<Room>,
    pub buildings: Vec<Building>,
    pub topology: Topology,
    /// The global transit hub every cross-building journey routes through.
    pub transit_hub: RoomId,

    room_names: FxHashMap<String, RoomId>,
    building_names: FxHashMap<String, BuildingId>,
}

impl World {
    pub(crate) fn new(
        rooms: Vec<Room>,
        buildings: Vec<Building>,
        topology: Topology,
        transit_hub: RoomId,
        room_names: FxHashMap<String, RoomId>,
        building_names: FxHashMap<String, BuildingId>,
    ) -> Self {
        Self {
            rooms,
            buildings,
            topology,
            transit_hub,
            room_names,
            building_names,
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    #[inline]
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    #[inline]
    pub fn building(&self, id: BuildingId) -> &Building {
        &self.buildings[id.index()]
    }

    /// Resolve a room name; unresolved names are fatal configuration errors.
    pub fn room_id(&self, name: &str) -> WorldResult<RoomId> {
        self.room_names
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownRoom(name.to_string()))
    }

    pub fn building_id(&self, name: &str) -> WorldResult<BuildingId> {
        self.building_names
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownBuilding(name.to_string()))
    }

    /// Iterator over all room ids in ascending order — the canonical room
    /// iteration order for draw-consuming passes.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len() as u32).map(RoomId)
    }

    /// Leaf rooms (hubs excluded) of buildings of `kind`, ascending.
    pub fn leaf_rooms_of_kind(&self, kind: BuildingKind) -> Vec<RoomId> {
        self.rooms
            .iter()
            .filter(|r| r.kind == kind && r.is_leaf())
            .map(|r| r.id)
            .collect()
    }

    /// The hub room of `building`, if it has one.
    pub fn hub_of(&self, building: BuildingId) -> Option<RoomId> {
        self.buildings[building.index()]
            .rooms
            .iter()
            .copied()
            .find(|&r| self.room(r).is_hub)
    }

    /// `true` if both rooms belong to the same building.
    #[inline]
    pub fn same_building(&self, a: RoomId, b: RoomId) -> bool {
        self.room(a).building == self.room(b).building
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Attempt to admit `agent` into `room`.
    ///
    /// Leaf rooms enforce their occupancy limit; a full room refuses entry
    /// and returns `false` (the caller leaves the agent where it was and
    /// retries at its next eligible tick).  Hubs are uncapped.
    pub fn try_enter(&mut self, room: RoomId, agent: AgentId) -> bool {
        let r = &mut self.rooms[room.index()];
        if r.is_hub || r.has_capacity() {
            r.occupants.insert(agent);
            true
        } else {
            false
        }
    }

    /// Remove `agent` from `room`.  A no-op if the agent is not inside.
    pub fn leave(&mut self, room: RoomId, agent: AgentId) {
        self.rooms[room.index()].occupants.remove(&agent);
    }

    /// Place `agent` into `room` without a capacity check (initial
    /// placement and forced routing).
    pub fn place(&mut self, room: RoomId, agent: AgentId) {
        self.rooms[room.index()].occupants.insert(agent);
    }

    // ── Invariant checks ──────────────────────────────────────────────────

    /// Verify the room/agent bijection: every agent appears in exactly the
    /// occupancy set of its own current room, and nowhere else.
    ///
    /// O(rooms + agents); intended for tests and debug assertions.
    pub fn verify_occupancy(&self, agents: &[Agent]) -> WorldResult<()> {
        let mut seen = vec![false; agents.len()];
        for room in &self.rooms {
            for &occupant in &room.occupants {
                let agent = agents.get(occupant.index()).ok_or_else(|| {
                    WorldError::OccupancyDrift(format!("unknown occupant {occupant} in {}", room.name))
                })?;
                if agent.room != room.id {
                    return Err(WorldError::OccupancyDrift(format!(
                        "{} sits in {} but its record says {}",
                        occupant, room.name, agent.room
                    )));
                }
                if seen[occupant.index()] {
                    return Err(WorldError::OccupancyDrift(format!(
                        "{occupant} present in more than one room"
                    )));
                }
                seen[occupant.index()] = true;
            }
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(WorldError::OccupancyDrift(format!(
                "agent {missing} is in no room's occupancy set"
            )));
        }
        Ok(())
    }
}
