//! Building closures.
//!
//! Two mechanisms, combined per configuration:
//!
//! - **schedule stripping**: every schedule entry targeting a leaf room
//!   of a closed kind is replaced by the agent's home room, so the rooms
//!   simply stop being visited;
//! - **leaf-closed / hub-open**: leaf rooms of the listed kinds get
//!   `kv = 0` and stop transmitting, while agents keep visiting them and
//!   the building's hub keeps its normal force.

use log::info;

use campus_core::BuildingKind;
use campus_world::{Agent, World};

/// Rewrite every agent's schedule, sending visits to leaf rooms of
/// `kinds` home instead.  Applied once at intervention setup.
pub fn strip_closed_kinds(world: &World, agents: &mut [Agent], kinds: &[BuildingKind]) {
    let closed: Vec<_> = kinds
        .iter()
        .flat_map(|&k| world.leaf_rooms_of_kind(k))
        .collect();
    for agent in agents.iter_mut() {
        let home = agent.home;
        agent
            .schedule
            .retarget(|room| closed.contains(&room).then_some(home));
    }
    info!("closed {} rooms across {} building kinds", closed.len(), kinds.len());
}

/// Zero `kv` on the leaf rooms of `kinds`, leaving their hubs
/// transmitting.  Occupancy and movement are unaffected.
pub fn close_leaf_open_hub(world: &mut World, kinds: &[BuildingKind]) {
    for i in 0..world.rooms.len() {
        let room = &mut world.rooms[i];
        if kinds.contains(&room.kind) && room.is_leaf() {
            room.kv = 0.0;
        }
    }
}
