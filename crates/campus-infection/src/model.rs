//! Force computation and the four infection passes.

use log::{debug, info};

use campus_core::{AgentId, Archetype, BuildingKind, DiseaseState, RoomId, SimRng, Tick};
use campus_disease::DiseaseModel;
use campus_world::{Agent, World};

use crate::config::EpiConfig;

/// Runs the infection passes and keeps the supplementary-pass tallies.
#[derive(Debug)]
pub struct InfectionModel {
    config: EpiConfig,
    /// Cumulative exposures from the office-hour pass.
    pub office_hour_infections: u32,
    /// Cumulative exposures from gathering events.
    pub gathering_infections: u32,
}

impl InfectionModel {
    pub fn new(config: EpiConfig) -> Self {
        Self {
            config,
            office_hour_infections: 0,
            gathering_infections: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &EpiConfig {
        &self.config
    }

    // ── Force computation ─────────────────────────────────────────────────

    /// An occupant's infectivity contribution.  `masked_context` is true
    /// where the mask policy reduces this agent's output (leaf rooms of
    /// exempt kinds, gatherings).
    fn contribution(&self, agent: &Agent, masked_context: bool, masking: bool) -> f64 {
        let mut weight = self.config.weight(agent.state);
        if masking && agent.compliance && masked_context {
            weight *= self.config.mask_multiplier;
        }
        weight
    }

    /// The per-pass exposure probability for one room.
    pub fn room_force(&self, world: &World, agents: &[Agent], room: RoomId, masking: bool) -> f64 {
        let room = world.room(room);
        let masked_context = room.is_leaf() && self.config.is_mask_exempt(room.kind);
        let contribution: f64 = room
            .occupants
            .iter()
            .map(|&id| self.contribution(&agents[id.index()], masked_context, masking))
            .sum();

        if room.kind == BuildingKind::Social && room.is_leaf() {
            let occupancy = room.occupancy();
            if occupancy == 0 {
                return 0.0;
            }
            self.config.base_p * 2.0 * contribution / (5 * (occupancy / 5 + 1)) as f64
        } else {
            if room.limit == 0 {
                return 0.0;
            }
            self.config.base_p * room.kv * contribution / f64::from(room.limit)
        }
    }

    /// The susceptible-side mask coefficient: a compliant agent in a room
    /// of an exempt kind absorbs less.
    fn susceptible_coeff(&self, agent: &Agent, kind: BuildingKind, masking: bool) -> f64 {
        if masking && agent.compliance && self.config.is_mask_exempt(kind) {
            self.config.mask_multiplier
        } else {
            1.0
        }
    }

    // ── Room passes ───────────────────────────────────────────────────────

    /// Hourly pass over leaf rooms.  Returns the number of new exposures.
    pub fn leaf_pass(
        &mut self,
        world: &mut World,
        agents: &mut [Agent],
        disease: &mut DiseaseModel,
        masking: bool,
        now: Tick,
        rng: &mut SimRng,
    ) -> u32 {
        self.room_pass(world, agents, disease, masking, now, rng, false)
    }

    /// Hub pass, run after each movement sub-step.
    pub fn hub_pass(
        &mut self,
        world: &mut World,
        agents: &mut [Agent],
        disease: &mut DiseaseModel,
        masking: bool,
        now: Tick,
        rng: &mut SimRng,
    ) -> u32 {
        self.room_pass(world, agents, disease, masking, now, rng, true)
    }

    #[allow(clippy::too_many_arguments)]
    fn room_pass(
        &mut self,
        world: &mut World,
        agents: &mut [Agent],
        disease: &mut DiseaseModel,
        masking: bool,
        now: Tick,
        rng: &mut SimRng,
        hubs: bool,
    ) -> u32 {
        let mut exposures = 0;
        for i in 0..world.rooms.len() {
            let room = &world.rooms[i];
            if room.is_hub != hubs || room.kind == BuildingKind::OffCampus {
                continue;
            }
            let force = self.room_force(world, agents, room.id, masking);
            if force <= 0.0 {
                continue;
            }
            let kind = world.rooms[i].kind;
            let occupants: Vec<AgentId> = world.rooms[i].occupants.iter().copied().collect();
            for id in occupants {
                let agent = &agents[id.index()];
                if agent.state != DiseaseState::Susceptible {
                    continue;
                }
                let coeff = self.susceptible_coeff(agent, kind, masking);
                if rng.uniform() < coeff * force {
                    disease.expose(agents, id, now);
                    world.rooms[i].infected_count += 1;
                    exposures += 1;
                    debug!("{now} exposure in {} (force {force:.5})", world.rooms[i].name);
                }
            }
        }
        exposures
    }

    // ── Office hours ──────────────────────────────────────────────────────

    /// Pairwise faculty/student contacts in classrooms.
    ///
    /// Every (faculty, attending-student) pair physically present in a
    /// classroom draws one uniform against a bounded-denominator force;
    /// success exposes the susceptible member(s) of the pair.
    pub fn office_hour_pass(
        &mut self,
        world: &World,
        agents: &mut [Agent],
        disease: &mut DiseaseModel,
        now: Tick,
        rng: &mut SimRng,
    ) -> u32 {
        let mut exposures = 0;
        for i in 0..world.rooms.len() {
            let room = &world.rooms[i];
            if room.kind != BuildingKind::Classroom || room.is_hub || room.occupants.is_empty() {
                continue;
            }
            let faculty: Vec<AgentId> = room
                .occupants
                .iter()
                .copied()
                .filter(|&id| agents[id.index()].archetype == Archetype::Faculty)
                .collect();
            if faculty.is_empty() {
                continue;
            }
            let attendees: Vec<AgentId> = room
                .occupants
                .iter()
                .copied()
                .filter(|&id| {
                    let a = &agents[id.index()];
                    a.archetype != Archetype::Faculty && a.office_attendee
                })
                .collect();
            let on_site = (faculty.len() + attendees.len()) as f64;

            for &f in &faculty {
                for &s in &attendees {
                    let pair_contribution =
                        self.config.weight(agents[f.index()].state) + self.config.weight(agents[s.index()].state);
                    let force = 3.0 * self.config.base_p * pair_contribution / on_site;
                    if force <= 0.0 {
                        continue;
                    }
                    if rng.uniform() < force {
                        for id in [f, s] {
                            if agents[id.index()].state == DiseaseState::Susceptible {
                                disease.expose(agents, id, now);
                                exposures += 1;
                            }
                        }
                    }
                }
            }
        }
        self.office_hour_infections += exposures;
        exposures
    }

    // ── Gatherings ────────────────────────────────────────────────────────

    /// Weekly large-gathering event over `gathering`-flagged agents.
    ///
    /// Forms disjoint random groups and applies a saturating-denominator
    /// social force per group.  No-ops below the attendance floor.
    pub fn gathering_pass(
        &mut self,
        agents: &mut [Agent],
        disease: &mut DiseaseModel,
        masking: bool,
        now: Tick,
        rng: &mut SimRng,
    ) -> u32 {
        let spec = self.config.gathering.clone();
        let mut pool: Vec<AgentId> = agents
            .iter()
            .filter(|a| a.gathering)
            .map(|a| a.id)
            .collect();
        if pool.len() < spec.min_attendees {
            info!("{now} gathering skipped: {} eligible agents", pool.len());
            return 0;
        }
        rng.shuffle(&mut pool);

        let mut exposures = 0;
        let mut cursor = 0;
        for _ in 0..spec.groups {
            let size = rng.gen_range(spec.min_size..=spec.max_size);
            let end = (cursor + size).min(pool.len());
            if cursor >= end {
                break;
            }
            let group = &pool[cursor..end];
            cursor = end;

            let contribution: f64 = group
                .iter()
                .map(|&id| self.contribution(&agents[id.index()], true, masking))
                .sum();
            let force =
                3.0 * self.config.base_p * contribution / (40 * (group.len() / 40 + 1)) as f64;
            if force <= 0.0 {
                continue;
            }
            for &id in group {
                if agents[id.index()].state == DiseaseState::Susceptible && rng.uniform() < force {
                    disease.expose(agents, id, now);
                    exposures += 1;
                }
            }
        }
        if exposures > 0 {
            info!("{now} gathering exposed {exposures} agents");
        }
        self.gathering_infections += exposures;
        exposures
    }

    // ── Off-campus return ─────────────────────────────────────────────────

    /// One-shot exposure check for an agent crossing from the off-campus
    /// hub back onto the transit network.  Returns `true` on exposure.
    pub fn off_campus_return(
        &mut self,
        world: &World,
        agents: &mut [Agent],
        disease: &mut DiseaseModel,
        id: AgentId,
        previous: RoomId,
        new: RoomId,
        now: Tick,
        rng: &mut SimRng,
    ) -> bool {
        let from = world.room(previous);
        if !(from.kind == BuildingKind::OffCampus && from.is_hub && new == world.transit_hub) {
            return false;
        }
        if agents[id.index()].state == DiseaseState::Susceptible
            && rng.uniform() < self.config.off_campus_p
        {
            disease.expose(agents, id, now);
            debug!("{now} {id} exposed returning to campus");
            return true;
        }
        false
    }
}
