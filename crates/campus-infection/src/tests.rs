//! Unit tests for campus-infection.

use campus_core::{AgentId, DiseaseState, RoomId, SimRng, Tick};
use campus_disease::{DiseaseModel, TransitionTable};
use campus_world::{Agent, AgentSpec, RoomSpec, World, WorldBuilder};

use crate::{EpiConfig, InfectionModel};

use DiseaseState::*;

// ── Fixture ───────────────────────────────────────────────────────────────────
//
// Room ids: 0 transit_space_hub, 1 dorm_a_hub, 2 dorm_a_101,
//           3 social_hub, 4 lounge, 5 hall_hub, 6 hall_200,
//           7 offCampus_hub.

const TRANSIT: RoomId = RoomId(0);
const DORM_HUB: RoomId = RoomId(1);
const DORM_101: RoomId = RoomId(2);
const LOUNGE: RoomId = RoomId(4);
const HALL_200: RoomId = RoomId(6);
const OFF_HUB: RoomId = RoomId(7);

fn campus(cohorts: Vec<(&str, &str, &str, u32)>) -> (World, Vec<Agent>) {
    let row = |name: &str, building: &str, kind: &str, conn: &str, cap, kv| RoomSpec {
        room_name:     name.to_string(),
        building_name: building.to_string(),
        building_type: kind.to_string(),
        connected_to:  conn.to_string(),
        travel_time:   1,
        capacity:      cap,
        kv,
    };
    let rooms = vec![
        row("transit_space_hub", "transit_space", "transit", "", 40, 1.0),
        row("dorm_a_hub", "dorm_a", "dorm", "transit_space_hub", 40, 1.0),
        row("dorm_a_101", "dorm_a", "dorm", "dorm_a_hub", 10, 1.0),
        row("social_hub", "social_house", "social", "transit_space_hub", 40, 1.0),
        row("lounge", "social_house", "social", "social_hub", 30, 1.0),
        row("hall_hub", "hall", "classroom", "transit_space_hub", 40, 1.0),
        row("hall_200", "hall", "classroom", "hall_hub", 30, 1.0),
        row("offCampus_hub", "offCampus_world", "offCampus", "transit_space_hub", 4000, 1.0),
    ];
    let agents = cohorts
        .into_iter()
        .map(|(archetype, kind, location, count)| AgentSpec {
            archetype:        archetype.to_string(),
            agent_type:       kind.to_string(),
            initial_location: location.to_string(),
            count,
        })
        .collect();
    let mut rng = SimRng::new(5);
    WorldBuilder::new("transit_space_hub")
        .rooms(rooms)
        .agents(agents)
        .build(&[], &mut rng)
        .unwrap()
}

fn disease_for(agents: &[Agent]) -> DiseaseModel {
    let mut m = DiseaseModel::new(TransitionTable::default()).unwrap();
    m.index_population(agents);
    m
}

/// Make agent `id` mildly symptomatic (weight 1.0) through the sole mutator.
fn infect(disease: &mut DiseaseModel, agents: &mut [Agent], id: u32) {
    disease.change_state(agents, AgentId(id), InfectedSymptomaticMild, Tick(0));
}

// ── Force formulas ────────────────────────────────────────────────────────────

mod force {
    use super::*;

    #[test]
    fn ordinary_room_uses_kv_over_limit() {
        let (world, mut agents) = campus(vec![("student", "onCampus", "dorm_a_101", 4)]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);
        let model = InfectionModel::new(EpiConfig::default());

        // base_p 1.25 * kv 1 * weight 1 / limit 10
        let force = model.room_force(&world, &agents, DORM_101, false);
        assert!((force - 0.125).abs() < 1e-12);
    }

    #[test]
    fn empty_or_healthy_room_has_zero_force() {
        let (world, agents) = campus(vec![("student", "onCampus", "dorm_a_101", 3)]);
        let model = InfectionModel::new(EpiConfig::default());

        assert_eq!(model.room_force(&world, &agents, DORM_101, false), 0.0);
        assert_eq!(model.room_force(&world, &agents, LOUNGE, false), 0.0);
    }

    #[test]
    fn social_leaf_uses_the_saturating_denominator() {
        let (world, mut agents) = campus(vec![("student", "onCampus", "lounge", 7)]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);
        infect(&mut disease, &mut agents, 1);
        let model = InfectionModel::new(EpiConfig::default());

        // 7 occupants: denominator 5 * (7/5 + 1) = 10; force = 1.25*2*2/10.
        let force = model.room_force(&world, &agents, LOUNGE, false);
        assert!((force - 0.5).abs() < 1e-12);
    }

    #[test]
    fn force_is_monotone_in_occupant_weight() {
        let (world, mut agents) = campus(vec![("student", "onCampus", "dorm_a_101", 4)]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);
        let model = InfectionModel::new(EpiConfig::default());
        let base = model.room_force(&world, &agents, DORM_101, false);

        infect(&mut disease, &mut agents, 1);
        let heavier = model.room_force(&world, &agents, DORM_101, false);
        assert!(heavier >= base);
    }

    #[test]
    fn zeroed_kv_kills_the_force_entirely() {
        let (mut world, mut agents) = campus(vec![("student", "onCampus", "dorm_a_101", 4)]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);
        let model = InfectionModel::new(EpiConfig::default());

        world.room_mut(DORM_101).kv = 0.0;
        assert_eq!(model.room_force(&world, &agents, DORM_101, false), 0.0);
    }

    #[test]
    fn masks_cut_contribution_only_in_exempt_leaf_rooms() {
        let (world, mut agents) = campus(vec![
            ("student", "onCampus", "dorm_a_101", 2),
            ("student", "onCampus", "hall_200", 2),
        ]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);
        infect(&mut disease, &mut agents, 2);
        agents[0].compliance = true;
        agents[2].compliance = true;
        let model = InfectionModel::new(EpiConfig::default());

        // Dorms are mask-exempt: compliant contributor is halved.
        let unmasked = model.room_force(&world, &agents, DORM_101, false);
        let masked = model.room_force(&world, &agents, DORM_101, true);
        assert!((masked - unmasked * 0.5).abs() < 1e-12);

        // Classrooms are not: masking leaves the force unchanged.
        let unmasked = model.room_force(&world, &agents, HALL_200, false);
        let masked = model.room_force(&world, &agents, HALL_200, true);
        assert_eq!(masked, unmasked);
    }
}

// ── Room passes ───────────────────────────────────────────────────────────────

mod passes {
    use super::*;

    /// A config whose ordinary force is ≥ 1 in the fixture dorm room, so
    /// exposure outcomes are deterministic regardless of the draws.
    fn certain_config() -> EpiConfig {
        EpiConfig { base_p: 20.0, ..EpiConfig::default() }
    }

    #[test]
    fn leaf_pass_exposes_and_counts() {
        let (mut world, mut agents) = campus(vec![("student", "onCampus", "dorm_a_101", 4)]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);
        let mut model = InfectionModel::new(certain_config());
        let mut rng = SimRng::new(1);

        let exposed = model.leaf_pass(&mut world, &mut agents, &mut disease, false, Tick(5), &mut rng);
        assert_eq!(exposed, 3);
        assert_eq!(world.room(DORM_101).infected_count, 3);
        assert_eq!(disease.agents_in(Exposed).len(), 3);
        for agent in &agents[1..] {
            assert_eq!(agent.state, Exposed);
            assert_eq!(agent.last_update, Tick(5));
        }
        disease.verify_index(&agents).unwrap();
    }

    #[test]
    fn leaf_pass_skips_hubs_and_hub_pass_skips_leaves() {
        let (mut world, mut agents) = campus(vec![("student", "onCampus", "dorm_a_101", 4)]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);

        // Move everyone onto the dorm hub.
        for agent in agents.iter_mut() {
            world.leave(DORM_101, agent.id);
            world.place(DORM_HUB, agent.id);
            agent.room = DORM_HUB;
        }
        let mut model = InfectionModel::new(certain_config());
        let mut rng = SimRng::new(1);

        let from_leaves =
            model.leaf_pass(&mut world, &mut agents, &mut disease, false, Tick(5), &mut rng);
        assert_eq!(from_leaves, 0);

        let from_hubs =
            model.hub_pass(&mut world, &mut agents, &mut disease, false, Tick(5), &mut rng);
        assert_eq!(from_hubs, 3);
    }

    #[test]
    fn off_campus_rooms_never_transmit() {
        let (mut world, mut agents) = campus(vec![("student", "offCampus", "offCampus_hub", 10)]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0);
        let mut model = InfectionModel::new(certain_config());
        let mut rng = SimRng::new(1);

        let exposed = model.hub_pass(&mut world, &mut agents, &mut disease, false, Tick(5), &mut rng);
        assert_eq!(exposed, 0);
        assert_eq!(disease.agents_in(Exposed).len(), 0);
    }

    #[test]
    fn office_hours_expose_attending_pairs() {
        let (mut world, mut agents) = campus(vec![
            ("faculty", "faculty", "hall_200", 1),
            ("student", "onCampus", "hall_200", 2),
        ]);
        let mut disease = disease_for(&agents);
        infect(&mut disease, &mut agents, 0); // the professor
        agents[1].office_attendee = true; // agent 2 never attends
        let mut model = InfectionModel::new(certain_config());
        let mut rng = SimRng::new(1);

        let exposed = model.office_hour_pass(&world, &mut agents, &mut disease, Tick(9), &mut rng);
        assert_eq!(exposed, 1);
        assert_eq!(agents[1].state, Exposed);
        assert_eq!(agents[2].state, Susceptible);
        assert_eq!(model.office_hour_infections, 1);
    }

    #[test]
    fn gathering_noops_below_the_attendance_floor() {
        let (_, mut agents) = campus(vec![("student", "onCampus", "dorm_a_101", 10)]);
        let mut disease = disease_for(&agents);
        for agent in agents.iter_mut() {
            agent.gathering = true;
        }
        let mut model = InfectionModel::new(certain_config());
        let mut rng = SimRng::new(1);

        let exposed = model.gathering_pass(&mut agents, &mut disease, false, Tick(168), &mut rng);
        assert_eq!(exposed, 0);
    }

    #[test]
    fn gathering_groups_are_disjoint() {
        let (_, mut agents) = campus(vec![("student", "onCampus", "transit_space_hub", 80)]);
        let mut disease = disease_for(&agents);
        for agent in agents.iter_mut() {
            agent.gathering = true;
        }
        infect(&mut disease, &mut agents, 0);
        let mut model = InfectionModel::new(certain_config());
        let mut rng = SimRng::new(1);

        // With a saturated force every susceptible group member of the
        // seeded group is exposed once; disjoint groups mean nobody can be
        // exposed twice, so the tally equals the distinct exposed count.
        let exposed = model.gathering_pass(&mut agents, &mut disease, false, Tick(168), &mut rng);
        assert_eq!(exposed as usize, disease.agents_in(Exposed).len());
        disease.verify_index(&agents).unwrap();
    }

    #[test]
    fn returning_from_off_campus_can_expose() {
        let (world, mut agents) = campus(vec![("student", "offCampus", "offCampus_hub", 2)]);
        let mut disease = disease_for(&agents);
        let mut model = InfectionModel::new(EpiConfig {
            off_campus_p: 1.0,
            ..EpiConfig::default()
        });
        let mut rng = SimRng::new(1);

        let hit = model.off_campus_return(
            &world, &mut agents, &mut disease, AgentId(0), OFF_HUB, TRANSIT, Tick(7), &mut rng,
        );
        assert!(hit);
        assert_eq!(agents[0].state, Exposed);

        // A dorm-to-hub move is not a return crossing.
        let miss = model.off_campus_return(
            &world, &mut agents, &mut disease, AgentId(1), DORM_101, TRANSIT, Tick(7), &mut rng,
        );
        assert!(!miss);
        assert_eq!(agents[1].state, Susceptible);
    }
}
