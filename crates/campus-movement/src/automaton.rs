//! The movement state machine.

use log::trace;

use campus_core::{DayKind, DiseaseState, Motion, RoomId, Tick};
use campus_world::{Agent, World};

/// Advances agent positions; holds the routing policy knobs.
#[derive(Clone, Debug)]
pub struct MovementAutomaton {
    /// A severely symptomatic agent this many ticks past its last state
    /// change is routed home regardless of its schedule.
    pub severe_home_after: u64,
}

impl Default for MovementAutomaton {
    fn default() -> Self {
        Self { severe_home_after: 120 }
    }
}

impl MovementAutomaton {
    /// Advance one agent by one sub-step.
    ///
    /// Returns `(previous_room, new_room)`; `(r, r)` means the agent did
    /// not relocate this sub-step.  Occupancy sets are updated here, so
    /// the room/agent bijection holds on return.
    pub fn step(
        &self,
        world: &mut World,
        agent: &mut Agent,
        day_kind: DayKind,
        now: Tick,
    ) -> (RoomId, RoomId) {
        match agent.motion {
            Motion::Stationary => self.depart(world, agent, day_kind, now),
            Motion::Moving => self.hop(world, agent, now),
        }
    }

    // ── Stationary: plan a route ──────────────────────────────────────────

    fn depart(
        &self,
        world: &mut World,
        agent: &mut Agent,
        day_kind: DayKind,
        now: Tick,
    ) -> (RoomId, RoomId) {
        let here = agent.room;
        if now < agent.arrival_time {
            return (here, here);
        }
        let destination = self.target(agent, day_kind, now);
        if destination == here {
            return (here, here);
        }

        agent.destination = destination;
        agent.path.clear();
        if world.same_building(here, destination) {
            agent.path.push(destination);
        } else {
            // Pushed in reverse: popped as own hub, transit, destination
            // hub, then the implicit final hop to the destination itself.
            if let Some(dest_hub) = world.hub_of(world.room(destination).building) {
                agent.path.push(dest_hub);
            }
            agent.path.push(world.transit_hub);
            if let Some(own_hub) = world.hub_of(world.room(here).building) {
                agent.path.push(own_hub);
            }
        }
        agent.motion = Motion::Moving;
        agent.arrival_time = now;
        // Hops resolve at sub-step granularity: one hop per movement
        // sub-step, so a cross-building journey completes within the four
        // sub-steps of one awake hour.
        agent.travel_time = 0;
        trace!("{now} {}: {} -> {} via {} hops", agent.id, here, destination, agent.path.len());

        // The first hop fires in the same sub-step as the planning.
        self.hop(world, agent, now)
    }

    /// Where the agent should be this hour, with illness overrides.
    fn target(&self, agent: &Agent, day_kind: DayKind, now: Tick) -> RoomId {
        match agent.state {
            DiseaseState::Quarantined => agent.home,
            DiseaseState::InfectedSymptomaticSevere
                if now > agent.last_update + self.severe_home_after =>
            {
                agent.home
            }
            _ => agent.schedule.room_at(day_kind, now.hour_of_day()),
        }
    }

    // ── Moving: take the next hop ─────────────────────────────────────────

    fn hop(&self, world: &mut World, agent: &mut Agent, now: Tick) -> (RoomId, RoomId) {
        let here = agent.room;
        if now < agent.arrival_time + agent.travel_time {
            return (here, here);
        }
        let next = match agent.path.last() {
            Some(&hop) => hop,
            None => agent.destination,
        };
        if next == here {
            // Degenerate hop (agent already stands on it); consume it.
            agent.path.pop();
            if agent.path.is_empty() && agent.destination == here {
                agent.motion = Motion::Stationary;
            }
            return (here, here);
        }

        if !world.try_enter(next, agent.id) {
            // Room at capacity: stay put, retry at the next sub-step.
            return (here, here);
        }
        world.leave(here, agent.id);
        if agent.path.last() == Some(&next) {
            agent.path.pop();
        }
        agent.room = next;
        agent.arrival_time = now;
        if agent.path.is_empty() && next == agent.destination {
            agent.motion = Motion::Stationary;
        }
        (here, next)
    }
}
