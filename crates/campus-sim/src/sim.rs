//! The hourly tick loop.

use log::{debug, info};

use campus_core::{DiseaseState, SimClock, SimConfig, SimRng, Tick, TICKS_PER_WEEK};
use campus_disease::DiseaseModel;
use campus_infection::InfectionModel;
use campus_intervention::{walk_in_check, InterventionConfig, TestingProtocol};
use campus_movement::MovementAutomaton;
use campus_world::{Agent, World};

use crate::error::SimResult;
use crate::observer::SimObserver;

/// Movement sub-steps per tick.  A cross-building journey takes four hops
/// (own hub, transit, destination hub, destination), so it completes
/// within one awake hour.
pub const SUB_STEPS: usize = 4;

/// A fully assembled simulation, ready to run.
///
/// Construct through [`crate::SimBuilder`]; the struct itself only owns
/// the pieces and drives the tick sequence.
#[derive(Debug)]
pub struct Sim {
    config: SimConfig,
    world: World,
    agents: Vec<Agent>,
    disease: DiseaseModel,
    infection: InfectionModel,
    interventions: InterventionConfig,
    testing: Option<TestingProtocol>,
    automaton: MovementAutomaton,
    clock: SimClock,
    rng: SimRng,
}

impl Sim {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        config: SimConfig,
        world: World,
        agents: Vec<Agent>,
        disease: DiseaseModel,
        infection: InfectionModel,
        interventions: InterventionConfig,
        testing: Option<TestingProtocol>,
        automaton: MovementAutomaton,
        rng: SimRng,
    ) -> Self {
        Self {
            config,
            world,
            agents,
            disease,
            infection,
            interventions,
            testing,
            automaton,
            clock: SimClock::new(),
            rng,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn disease(&self) -> &DiseaseModel {
        &self.disease
    }

    #[inline]
    pub fn infection(&self) -> &InfectionModel {
        &self.infection
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    // ── The loop ──────────────────────────────────────────────────────────

    /// Run the simulation to its configured end tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        info!(
            "starting run: {} agents, {} rooms, {} ticks, seed {}",
            self.agents.len(),
            self.world.rooms.len(),
            end.0,
            self.config.seed
        );
        while self.clock.current_tick < end {
            self.clock.advance();
            self.tick(observer);
        }
        info!("run complete at {}", self.clock);
        observer.on_sim_end(self.clock.current_tick, &self.world, &self.infection);
        Ok(())
    }

    /// One tick of the sequence documented at the crate root.
    fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let toggles = self.interventions.toggles;
        let mut exposures = 0;

        // ① Awake window: movement, room infection, timer transitions.
        // Once everyone is recovered there is nothing left to drive, so
        // the whole block is skipped and only interventions keep firing.
        let recovered = self.disease.agents_in(DiseaseState::Recovered).len();
        if self.config.is_awake_hour(now.hour_of_day()) && recovered != self.agents.len() {
            for _ in 0..SUB_STEPS {
                exposures += self.movement_sub_step(now);
                exposures += self.infection.hub_pass(
                    &mut self.world,
                    &mut self.agents,
                    &mut self.disease,
                    toggles.masking,
                    now,
                    &mut self.rng,
                );
            }
            exposures += self.infection.leaf_pass(
                &mut self.world,
                &mut self.agents,
                &mut self.disease,
                toggles.masking,
                now,
                &mut self.rng,
            );
            self.disease.timer_pass(&mut self.agents, now, &mut self.rng);
            if toggles.office_hours {
                exposures += self.infection.office_hour_pass(
                    &self.world,
                    &mut self.agents,
                    &mut self.disease,
                    now,
                    &mut self.rng,
                );
            }
        }

        // ② Weekly boundary: the large gathering.
        if toggles.gatherings && now.0 % TICKS_PER_WEEK == 0 {
            exposures += self.infection.gathering_pass(
                &mut self.agents,
                &mut self.disease,
                toggles.masking,
                now,
                &mut self.rng,
            );
        }

        // ③ Weekday interventions.
        if self.clock.day_kind.is_weekday() {
            if toggles.walk_in && now.hour_of_day() == self.interventions.walkin.hour {
                walk_in_check(
                    &self.interventions.walkin,
                    self.interventions.testing.false_negative,
                    &mut self.agents,
                    &mut self.disease,
                    now,
                    &mut self.rng,
                );
            }
            if let Some(testing) = self.testing.as_mut() {
                if testing.round_due(now) {
                    testing.run_round(&self.agents, now, &mut self.rng);
                }
                if testing.release_due(now) {
                    testing.release(&mut self.agents, &mut self.disease, now);
                }
            }
        }

        // ④ Snapshot.
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(
                now,
                &self.disease.counts(),
                self.disease.false_positive_count() as u32,
            );
        }
        if exposures > 0 {
            debug!("{now}: {exposures} new exposures");
        }
        observer.on_tick_end(now, exposures);
    }

    /// Advance every agent by one movement sub-step, ascending by id, and
    /// apply the off-campus return exposure to agents crossing back onto
    /// the transit network.  Returns exposures from those crossings.
    fn movement_sub_step(&mut self, now: Tick) -> u32 {
        let mut exposures = 0;
        for i in 0..self.agents.len() {
            let id = self.agents[i].id;
            let (previous, new) = self.automaton.step(
                &mut self.world,
                &mut self.agents[i],
                self.clock.day_kind,
                now,
            );
            if previous != new
                && self.infection.off_campus_return(
                    &self.world,
                    &mut self.agents,
                    &mut self.disease,
                    id,
                    previous,
                    new,
                    now,
                    &mut self.rng,
                )
            {
                exposures += 1;
            }
        }
        exposures
    }
}
