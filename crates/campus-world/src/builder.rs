//! `WorldBuilder` — raw table rows in, validated [`World`] plus agent
//! population out.
//!
//! Buildings are not a separate input table: they are derived from the
//! room rows in first-appearance order, so a building's id is determined
//! by where its first room sits in the room table.

use rustc_hash::FxHashMap;

use campus_core::{
    AgentId, AgentKind, Archetype, BuildingId, BuildingKind, RoomId, SimRng,
};
use campus_schedule::RawSchedule;

use crate::agent::Agent;
use crate::room::{Building, Room};
use crate::topology::Topology;
use crate::world::World;
use crate::{WorldError, WorldResult};

// ── Spec rows ─────────────────────────────────────────────────────────────────

/// One row of the room table.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RoomSpec {
    pub room_name:     String,
    pub building_name: String,
    /// `building_type` label; every room inherits its building's kind.
    pub building_type: String,
    /// Name of the one neighbor this room declares, or empty for none.
    /// Edges are inserted symmetrically, so leaves only declare their hub.
    #[serde(default)]
    pub connected_to:  String,
    #[serde(default)]
    pub travel_time:   u32,
    pub capacity:      u32,
    pub kv:            f64,
}

/// One row of the agent table; expands into `count` identical agents.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AgentSpec {
    pub archetype:        String,
    pub agent_type:       String,
    /// Where the expanded agents live: an exact room name, a building
    /// name, or a `building_type` label (a random fitting room is drawn).
    pub initial_location: String,
    pub count:            u32,
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Assembles a [`World`] and its agent population from spec rows.
#[derive(Default)]
pub struct WorldBuilder {
    rooms:        Vec<RoomSpec>,
    agents:       Vec<AgentSpec>,
    transit_name: String,
}

impl WorldBuilder {
    pub fn new(transit_name: impl Into<String>) -> Self {
        Self {
            rooms: Vec::new(),
            agents: Vec::new(),
            transit_name: transit_name.into(),
        }
    }

    pub fn rooms(mut self, specs: Vec<RoomSpec>) -> Self {
        self.rooms = specs;
        self
    }

    pub fn agents(mut self, specs: Vec<AgentSpec>) -> Self {
        self.agents = specs;
        self
    }

    /// Validate the tables and produce the world plus the placed agents.
    ///
    /// `schedules` is indexed by the expanded agent id; agents past its end
    /// get an all-home schedule.  `rng` drives home-room sampling for specs
    /// whose `initial_location` is a building or a building kind.
    pub fn build(
        self,
        schedules: &[RawSchedule],
        rng: &mut SimRng,
    ) -> WorldResult<(World, Vec<Agent>)> {
        let (rooms, buildings, room_names, building_names) = self.index_rooms()?;
        let topology = Self::link(&self.rooms, &rooms, &room_names)?;

        let transit_hub = room_names
            .get(self.transit_name.as_str())
            .copied()
            .ok_or_else(|| WorldError::UnknownRoom(self.transit_name.clone()))?;

        let mut world = World::new(
            rooms,
            buildings,
            topology,
            transit_hub,
            room_names,
            building_names,
        );
        let agents = Self::populate(&self.agents, schedules, &mut world, rng)?;
        Ok((world, agents))
    }

    // ── Build phases ──────────────────────────────────────────────────────

    #[allow(clippy::type_complexity)]
    fn index_rooms(
        &self,
    ) -> WorldResult<(
        Vec<Room>,
        Vec<Building>,
        FxHashMap<String, RoomId>,
        FxHashMap<String, BuildingId>,
    )> {
        let mut rooms = Vec::with_capacity(self.rooms.len());
        let mut buildings: Vec<Building> = Vec::new();
        let mut room_names = FxHashMap::default();
        let mut building_names: FxHashMap<String, BuildingId> = FxHashMap::default();

        for (i, spec) in self.rooms.iter().enumerate() {
            let kind: BuildingKind = spec.building_type.parse()?;
            let building = match building_names.get(spec.building_name.as_str()) {
                Some(&id) => {
                    if buildings[id.index()].kind != kind {
                        return Err(WorldError::Parse(format!(
                            "building {:?} declared with conflicting types {} and {}",
                            spec.building_name,
                            buildings[id.index()].kind,
                            kind
                        )));
                    }
                    id
                }
                None => {
                    let id = BuildingId::try_from(buildings.len())
                        .map_err(|_| WorldError::Parse("too many buildings".into()))?;
                    buildings.push(Building {
                        id,
                        name: spec.building_name.clone(),
                        kind,
                        rooms: Vec::new(),
                    });
                    building_names.insert(spec.building_name.clone(), id);
                    id
                }
            };

            if spec.kv < 0.0 {
                return Err(WorldError::Parse(format!(
                    "room {:?} has negative kv {}",
                    spec.room_name, spec.kv
                )));
            }
            let id = RoomId(i as u32);
            if room_names.insert(spec.room_name.clone(), id).is_some() {
                return Err(WorldError::Parse(format!(
                    "duplicate room name {:?}",
                    spec.room_name
                )));
            }
            rooms.push(Room::new(
                id,
                spec.room_name.clone(),
                building,
                kind,
                spec.kv,
                spec.capacity,
            ));
            buildings[building.index()].rooms.push(id);
        }

        Ok((rooms, buildings, room_names, building_names))
    }

    fn link(
        specs: &[RoomSpec],
        rooms: &[Room],
        room_names: &FxHashMap<String, RoomId>,
    ) -> WorldResult<Topology> {
        let mut edges = Vec::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            let target = spec.connected_to.trim();
            if target.is_empty() {
                continue;
            }
            let to = room_names
                .get(target)
                .copied()
                .ok_or_else(|| WorldError::UnknownRoom(target.to_string()))?;
            edges.push((rooms[i].id, to, spec.travel_time));
        }
        Ok(Topology::from_edges(rooms.len(), edges, true))
    }

    fn populate(
        specs: &[AgentSpec],
        schedules: &[RawSchedule],
        world: &mut World,
        rng: &mut SimRng,
    ) -> WorldResult<Vec<Agent>> {
        let mut agents = Vec::new();
        for spec in specs {
            let archetype: Archetype = spec.archetype.parse()?;
            let kind: AgentKind = spec.agent_type.parse()?;
            for _ in 0..spec.count {
                let id = AgentId(agents.len() as u32);
                let home = Self::pick_home(&spec.initial_location, world, rng)?;
                let raw = schedules
                    .get(id.index())
                    .cloned()
                    .unwrap_or_else(RawSchedule::all_home);
                let agent = Agent::new(id, archetype, kind, home, raw.resolve(home));
                world.place(home, id);
                agents.push(agent);
            }
        }
        Ok(agents)
    }

    /// Resolve an `initial_location` to a leaf room with free capacity.
    ///
    /// Resolution order: exact room name, building name (draw among its
    /// leaf rooms), then `building_type` label (draw among all leaf rooms
    /// of that kind).
    fn pick_home(location: &str, world: &World, rng: &mut SimRng) -> WorldResult<RoomId> {
        if let Ok(room) = world.room_id(location) {
            return Ok(room);
        }
        let candidates: Vec<RoomId> = if let Ok(building) = world.building_id(location) {
            world.building(building)
                .rooms
                .iter()
                .copied()
                .filter(|&r| world.room(r).is_leaf())
                .collect()
        } else {
            let kind: BuildingKind = location
                .parse()
                .map_err(|_| WorldError::UnknownRoom(location.to_string()))?;
            world.leaf_rooms_of_kind(kind)
        };

        let open: Vec<RoomId> = candidates
            .into_iter()
            .filter(|&r| world.room(r).has_capacity())
            .collect();
        rng.choose(&open)
            .copied()
            .ok_or_else(|| WorldError::NoCapacity(location.to_string()))
    }
}
