//! Unit tests for campus-movement.

use campus_core::{DayKind, DiseaseState, Motion, RoomId, SimRng, Tick};
use campus_schedule::WeekSchedule;
use campus_world::{Agent, AgentSpec, RoomSpec, World, WorldBuilder};

use crate::MovementAutomaton;

// ── Fixture ───────────────────────────────────────────────────────────────────
//
// Room ids: 0 transit_space_hub, 1 dorm_a_hub, 2 dorm_a_101, 3 dorm_a_102,
//           4 hall_hub, 5 hall_200.

const TRANSIT: RoomId = RoomId(0);
const DORM_HUB: RoomId = RoomId(1);
const DORM_101: RoomId = RoomId(2);
const DORM_102: RoomId = RoomId(3);
const HALL_HUB: RoomId = RoomId(4);
const HALL_200: RoomId = RoomId(5);

fn campus() -> (World, Vec<Agent>) {
    let row = |name: &str, building: &str, kind: &str, conn: &str, cap| RoomSpec {
        room_name:     name.to_string(),
        building_name: building.to_string(),
        building_type: kind.to_string(),
        connected_to:  conn.to_string(),
        travel_time:   1,
        capacity:      cap,
        kv:            1.0,
    };
    let rooms = vec![
        row("transit_space_hub", "transit_space", "transit", "", 0),
        row("dorm_a_hub", "dorm_a", "dorm", "transit_space_hub", 0),
        row("dorm_a_101", "dorm_a", "dorm", "dorm_a_hub", 4),
        row("dorm_a_102", "dorm_a", "dorm", "dorm_a_hub", 4),
        row("hall_hub", "hall", "classroom", "transit_space_hub", 0),
        row("hall_200", "hall", "classroom", "hall_hub", 2),
    ];
    let agents = vec![AgentSpec {
        archetype:        "student".to_string(),
        agent_type:       "onCampus".to_string(),
        initial_location: "dorm_a_101".to_string(),
        count:            1,
    }];
    let mut rng = SimRng::new(1);
    WorldBuilder::new("transit_space_hub")
        .rooms(rooms)
        .agents(agents)
        .build(&[], &mut rng)
        .unwrap()
}

/// Point the agent's whole schedule at one room.
fn pin(agent: &mut Agent, room: RoomId) {
    agent.schedule = WeekSchedule::pinned(room);
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[test]
fn same_room_schedule_never_moves() {
    let (mut world, mut agents) = campus();
    let automaton = MovementAutomaton::default();
    pin(&mut agents[0], DORM_101);

    let moved = automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(8));
    assert_eq!(moved, (DORM_101, DORM_101));
    assert_eq!(agents[0].motion, Motion::Stationary);
}

#[test]
fn same_building_move_is_a_single_hop() {
    let (mut world, mut agents) = campus();
    let automaton = MovementAutomaton::default();
    pin(&mut agents[0], DORM_102);

    let moved = automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(8));
    assert_eq!(moved, (DORM_101, DORM_102));
    assert_eq!(agents[0].motion, Motion::Stationary);
    assert!(agents[0].path.is_empty());
    world.verify_occupancy(&agents).unwrap();
}

#[test]
fn cross_building_journey_takes_four_sub_steps() {
    let (mut world, mut agents) = campus();
    let automaton = MovementAutomaton::default();
    pin(&mut agents[0], HALL_200);

    let hops: Vec<RoomId> = (0..4)
        .map(|_| automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(8)).1)
        .collect();
    assert_eq!(hops, vec![DORM_HUB, TRANSIT, HALL_HUB, HALL_200]);
    assert_eq!(agents[0].motion, Motion::Stationary);
    world.verify_occupancy(&agents).unwrap();
}

#[test]
fn pending_path_never_exceeds_three_hops() {
    let (mut world, mut agents) = campus();
    let automaton = MovementAutomaton::default();
    pin(&mut agents[0], HALL_200);

    // After the planning sub-step one hop is already consumed, so the
    // in-flight path is at most two of the original three entries.
    automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(8));
    assert_eq!(agents[0].path, vec![HALL_HUB, TRANSIT]);
    assert_eq!(agents[0].destination, HALL_200);
}

// ── Illness overrides ─────────────────────────────────────────────────────────

#[test]
fn quarantined_agents_route_home() {
    let (mut world, mut agents) = campus();
    let automaton = MovementAutomaton::default();
    pin(&mut agents[0], HALL_200);

    // Walk the agent to class, then quarantine them there.
    for _ in 0..4 {
        automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(8));
    }
    assert_eq!(agents[0].room, HALL_200);
    agents[0].state = DiseaseState::Quarantined;

    for _ in 0..4 {
        automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(9));
    }
    assert_eq!(agents[0].room, DORM_101);
    assert_eq!(agents[0].motion, Motion::Stationary);
    world.verify_occupancy(&agents).unwrap();
}

#[test]
fn severe_symptoms_route_home_after_the_grace_window() {
    let (mut world, mut agents) = campus();
    let automaton = MovementAutomaton::default();
    pin(&mut agents[0], HALL_200);
    agents[0].state = DiseaseState::InfectedSymptomaticSevere;
    agents[0].last_update = Tick(0);

    // Within the window the schedule still applies.
    for _ in 0..4 {
        automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(100));
    }
    assert_eq!(agents[0].room, HALL_200);

    // Past it the agent is sent home.
    for _ in 0..4 {
        automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(121));
    }
    assert_eq!(agents[0].room, DORM_101);
}

// ── Capacity ──────────────────────────────────────────────────────────────────

#[test]
fn full_destination_stalls_the_final_hop_until_space_frees() {
    let (mut world, mut agents) = campus();
    let automaton = MovementAutomaton::default();
    pin(&mut agents[0], HALL_200);

    // Fill hall_200 (capacity 2) with outside ids.
    use campus_core::AgentId;
    world.place(HALL_200, AgentId(90));
    world.place(HALL_200, AgentId(91));

    for _ in 0..6 {
        automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(8));
    }
    // Stuck on the destination building's hub, still moving.
    assert_eq!(agents[0].room, HALL_HUB);
    assert_eq!(agents[0].motion, Motion::Moving);

    world.leave(HALL_200, AgentId(91));
    let moved = automaton.step(&mut world, &mut agents[0], DayKind::Even, Tick(9));
    assert_eq!(moved, (HALL_HUB, HALL_200));
    assert_eq!(agents[0].motion, Motion::Stationary);
}
