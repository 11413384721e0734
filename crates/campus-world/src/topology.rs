//! Room adjacency graph.
//!
//! Each room descriptor names exactly one `connected_to` neighbor and a
//! travel time.  The raw data is therefore a functional graph; in the
//! default undirected mode every edge is inserted symmetrically, so a hub
//! ends up adjacent to all of its building's leaf rooms even though each
//! leaf only declared the hub.

use campus_core::RoomId;

/// Adjacency lists with per-edge travel times, indexed by `RoomId`.
#[derive(Clone, Debug, Default)]
pub struct Topology {
    adjacency: Vec<Vec<(RoomId, u32)>>,
}

impl Topology {
    /// Build from `(room, connected_to, travel_time)` triples.
    ///
    /// `undirected` inserts every edge in both directions (the default for
    /// campus data).  Callers must have resolved `connected_to` names to
    /// ids already; see [`WorldBuilder`](crate::WorldBuilder).
    pub fn from_edges(
        room_count: usize,
        edges: impl IntoIterator<Item = (RoomId, RoomId, u32)>,
        undirected: bool,
    ) -> Self {
        let mut adjacency: Vec<Vec<(RoomId, u32)>> = vec![Vec::new(); room_count];
        for (from, to, travel) in edges {
            adjacency[from.index()].push((to, travel));
            if undirected {
                adjacency[to.index()].push((from, travel));
            }
        }
        Self { adjacency }
    }

    /// Rooms adjacent to `room`, with travel times, in insertion order.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[(RoomId, u32)] {
        &self.adjacency[room.index()]
    }

    /// The first declared neighbor of `room` — for leaf rooms this is the
    /// owning building's hub.
    #[inline]
    pub fn gateway(&self, room: RoomId) -> Option<RoomId> {
        self.adjacency[room.index()].first().map(|&(id, _)| id)
    }

    /// Travel time of the edge `from → to`, or `None` if not adjacent.
    pub fn travel_time(&self, from: RoomId, to: RoomId) -> Option<u32> {
        self.adjacency[from.index()]
            .iter()
            .find(|&&(id, _)| id == to)
            .map(|&(_, t)| t)
    }

    /// `true` if `from` and `to` share an edge.
    #[inline]
    pub fn is_adjacent(&self, from: RoomId, to: RoomId) -> bool {
        self.travel_time(from, to).is_some()
    }

    pub fn room_count(&self) -> usize {
        self.adjacency.len()
    }
}
