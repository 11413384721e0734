//! `SimBuilder` — assembles a [`Sim`] from configuration and input tables.
//!
//! # Required inputs
//!
//! | Input         | Provided by                                         |
//! |---------------|-----------------------------------------------------|
//! | `rooms`       | the room table ([`campus_world::load_world_csv`])   |
//! | `agents`      | the cohort table ([`campus_world::load_agents_csv`])|
//!
//! # Optional inputs
//!
//! | Input           | Default                                           |
//! |-----------------|---------------------------------------------------|
//! | `schedules`     | everyone home around the clock                    |
//! | `epi`           | baseline campus parameters (`EpiConfig::default`) |
//! | `interventions` | everything off except office hours and gatherings |
//! | `transitions`   | the baseline disease progression table            |
//! | `automaton`     | severe cases routed home after 120 ticks          |
//!
//! Setup order is fixed so a given seed always consumes RNG draws the
//! same way: world build and home placement, flag assignment, closures,
//! testing-group formation, then outbreak seeding.

use log::info;

use campus_core::{SimConfig, SimRng, Tick};
use campus_disease::{DiseaseModel, TransitionTable};
use campus_infection::{EpiConfig, InfectionModel};
use campus_intervention::{
    assign_compliance, assign_gathering, assign_office_attendees, close_leaf_open_hub,
    strip_closed_kinds, InterventionConfig, TestingProtocol,
};
use campus_movement::MovementAutomaton;
use campus_schedule::RawSchedule;
use campus_world::{AgentSpec, RoomSpec, WorldBuilder};

use crate::error::{SimError, SimResult};
use crate::sim::Sim;

pub struct SimBuilder {
    config: SimConfig,
    rooms: Vec<RoomSpec>,
    agents: Vec<AgentSpec>,
    schedules: Vec<RawSchedule>,
    epi: EpiConfig,
    interventions: InterventionConfig,
    transitions: TransitionTable,
    automaton: MovementAutomaton,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            rooms: Vec::new(),
            agents: Vec::new(),
            schedules: Vec::new(),
            epi: EpiConfig::default(),
            interventions: InterventionConfig::default(),
            transitions: TransitionTable::default(),
            automaton: MovementAutomaton::default(),
        }
    }

    pub fn rooms(mut self, rooms: Vec<RoomSpec>) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn agents(mut self, agents: Vec<AgentSpec>) -> Self {
        self.agents = agents;
        self
    }

    /// Weekly schedules, indexed by expanded agent id; agents past the end
    /// of the slice stay home around the clock.
    pub fn schedules(mut self, schedules: Vec<RawSchedule>) -> Self {
        self.schedules = schedules;
        self
    }

    pub fn epi(mut self, epi: EpiConfig) -> Self {
        self.epi = epi;
        self
    }

    pub fn interventions(mut self, interventions: InterventionConfig) -> Self {
        self.interventions = interventions;
        self
    }

    pub fn transitions(mut self, transitions: TransitionTable) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn automaton(mut self, automaton: MovementAutomaton) -> Self {
        self.automaton = automaton;
        self
    }

    /// Validate the inputs, build the world, apply setup-time
    /// interventions, and seed the outbreak.
    pub fn build(self) -> SimResult<Sim> {
        if self.rooms.is_empty() {
            return Err(SimError::Config("no rooms declared".into()));
        }
        if self.agents.is_empty() {
            return Err(SimError::Config("no agent cohorts declared".into()));
        }

        let mut rng = SimRng::new(self.config.seed);
        let (mut world, mut agents) = WorldBuilder::new(self.config.transit_name.clone())
            .rooms(self.rooms)
            .agents(self.agents)
            .build(&self.schedules, &mut rng)?;
        world.verify_occupancy(&agents)?;

        let mut disease = DiseaseModel::new(self.transitions)?;
        disease.index_population(&agents);

        let interventions = self.interventions;
        assign_office_attendees(&mut agents, interventions.office_attendee_ratio, &mut rng);
        assign_gathering(&mut agents, interventions.gathering_ratio, &mut rng);
        if interventions.toggles.masking {
            assign_compliance(&mut agents, interventions.compliance_ratio, &mut rng);
        }
        if interventions.toggles.closures {
            strip_closed_kinds(&world, &mut agents, &interventions.closures.closed_kinds);
            close_leaf_open_hub(&mut world, &interventions.closures.open_hub_kinds);
        }
        let testing = interventions
            .toggles
            .testing
            .then(|| TestingProtocol::new(interventions.testing.clone(), &agents, &mut rng));

        disease.seed_infections(
            &mut agents,
            self.epi.seed_state,
            self.epi.seed_count,
            Tick::ZERO,
            &mut rng,
        );
        info!(
            "world built: {} rooms, {} agents, {} seeded {}",
            world.rooms.len(),
            agents.len(),
            self.epi.seed_count,
            self.epi.seed_state.label()
        );

        let infection = InfectionModel::new(self.epi);
        Ok(Sim::new(
            self.config,
            world,
            agents,
            disease,
            infection,
            interventions,
            testing,
            self.automaton,
            rng,
        ))
    }
}
