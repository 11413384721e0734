//! `Room` and `Building` records.
//!
//! Created once at world build; topology fields are immutable afterwards.
//! Only the occupancy set, the cumulative infection counter, and `kv`
//! (zeroed by building closures) mutate during a run.

use std::collections::BTreeSet;

use campus_core::{AgentId, BuildingId, BuildingKind, RoomId};

/// Name suffix marking a room as a hub.
pub const HUB_SUFFIX: &str = "_hub";

// ── Room ──────────────────────────────────────────────────────────────────────

/// One room: a leaf destination or a hub.
#[derive(Clone, Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// The building this room belongs to.
    pub building: BuildingId,
    /// Functional kind, inherited from the owning building.
    pub kind: BuildingKind,
    /// Transmissibility coefficient scaling the room's force of infection.
    /// Zeroed when the room is closed with its hub left open.
    pub kv: f64,
    /// Occupancy limit, enforced on leaf-room entry and used as the force
    /// normalizer.  Hubs ignore it for entry.
    pub limit: u32,
    /// `true` if the room name carries the hub marker.
    pub is_hub: bool,

    /// Agents currently inside.  `BTreeSet` gives the ascending-`AgentId`
    /// iteration order the deterministic draw sequence depends on.
    pub occupants: BTreeSet<AgentId>,
    /// Cumulative number of exposures that happened in this room.
    pub infected_count: u32,
}

impl Room {
    pub fn new(
        id: RoomId,
        name: String,
        building: BuildingId,
        kind: BuildingKind,
        kv: f64,
        limit: u32,
    ) -> Self {
        let is_hub = name.ends_with(HUB_SUFFIX);
        Self {
            id,
            name,
            building,
            kind,
            kv,
            limit,
            is_hub,
            occupants: BTreeSet::new(),
            infected_count: 0,
        }
    }

    /// `true` if the room is a schedulable destination (not a hub).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !self.is_hub
    }

    /// `true` if at least one more agent fits.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        (self.occupants.len() as u32) < self.limit
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.occupants.len()
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// A building: an ordered list of rooms including the building's own hub.
#[derive(Clone, Debug)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub kind: BuildingKind,
    /// Rooms contained in this building, in table order.
    pub rooms: Vec<RoomId>,
}
