//! `DiseaseModel` — the per-state agent index and its sole mutator.

use std::collections::BTreeSet;

use log::debug;

use campus_core::{AgentId, DiseaseState, SimRng, Tick};
use campus_world::Agent;

use crate::table::TransitionTable;
use crate::{DiseaseError, DiseaseResult};

/// Owns the state→agents index, the false-positive marker set, and the
/// transition table.
///
/// Every state change goes through [`DiseaseModel::change_state`], which
/// updates the agent record and the index together.  Code elsewhere reads
/// the index but never writes it.
#[derive(Debug)]
pub struct DiseaseModel {
    table: TransitionTable,
    index: [BTreeSet<AgentId>; DiseaseState::COUNT],
    /// Agents quarantined off a false-positive test, for reporting.  Not a
    /// disease state; cleared when the agent leaves quarantine uninfected.
    false_positives: BTreeSet<AgentId>,
}

impl DiseaseModel {
    /// Build a model from a validated transition table.
    pub fn new(table: TransitionTable) -> DiseaseResult<Self> {
        table.validate()?;
        Ok(Self {
            table,
            index: std::array::from_fn(|_| BTreeSet::new()),
            false_positives: BTreeSet::new(),
        })
    }

    /// Rebuild the index from the population — called once after world
    /// build, before the first tick.
    pub fn index_population(&mut self, agents: &[Agent]) {
        for set in &mut self.index {
            set.clear();
        }
        for agent in agents {
            self.index[agent.state.index()].insert(agent.id);
        }
    }

    #[inline]
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Agents currently in `state`, ascending by id.
    #[inline]
    pub fn agents_in(&self, state: DiseaseState) -> &BTreeSet<AgentId> {
        &self.index[state.index()]
    }

    /// Population count per state, indexed by `DiseaseState::index()`.
    pub fn counts(&self) -> [u32; DiseaseState::COUNT] {
        std::array::from_fn(|i| self.index[i].len() as u32)
    }

    /// `true` while any agent is exposed, infected, or quarantined.
    pub fn has_active_cases(&self) -> bool {
        DiseaseState::ALL
            .iter()
            .filter(|s| s.is_infectious_entry() || **s == DiseaseState::Quarantined)
            .any(|s| !self.index[s.index()].is_empty())
    }

    // ── State changes ─────────────────────────────────────────────────────

    /// Move `id` into `to`, keeping the agent record and the index in
    /// lockstep.  Sets `last_update`, the new state's dwell, and the
    /// sticky `infected` flag on entry to any infectious-track state.
    pub fn change_state(&mut self, agents: &mut [Agent], id: AgentId, to: DiseaseState, now: Tick) {
        let agent = &mut agents[id.index()];
        let from = agent.state;

        self.index[from.index()].remove(&id);
        self.index[to.index()].insert(id);
        agent.state = to;
        agent.last_update = now;
        agent.dwell = self.table.dwell(to);
        if to.is_infectious_entry() {
            agent.infected = true;
        }
        debug!("{now} {id}: {} -> {}", from.label(), to.label());
    }

    /// Expose a susceptible agent (infection-force success or seeding).
    #[inline]
    pub fn expose(&mut self, agents: &mut [Agent], id: AgentId, now: Tick) {
        self.change_state(agents, id, DiseaseState::Exposed, now);
    }

    /// Release `id` from quarantine: `Recovered` if the agent was ever
    /// infected, else `Susceptible` (a false positive or precautionary
    /// isolation), clearing the false-positive marker.
    pub fn release_quarantine(&mut self, agents: &mut [Agent], id: AgentId, now: Tick) {
        let exit = if agents[id.index()].infected {
            DiseaseState::Recovered
        } else {
            self.false_positives.remove(&id);
            DiseaseState::Susceptible
        };
        self.change_state(agents, id, exit, now);
    }

    /// Seed the outbreak: move `count` random susceptible agents into
    /// `state` at tick `now`.
    pub fn seed_infections(
        &mut self,
        agents: &mut [Agent],
        state: DiseaseState,
        count: usize,
        now: Tick,
        rng: &mut SimRng,
    ) {
        let pool: Vec<AgentId> = self.agents_in(DiseaseState::Susceptible)
            .iter()
            .copied()
            .collect();
        for id in rng.sample(&pool, count) {
            self.change_state(agents, id, state, now);
        }
    }

    // ── Timer transitions ─────────────────────────────────────────────────

    /// Run the timer-transition pass: every agent whose dwell has elapsed
    /// samples its successor state.  States are visited in declared order
    /// and agents ascending by id, so draw consumption is deterministic.
    ///
    /// Quarantine expiry bypasses the CDF; see [`Self::release_quarantine`].
    pub fn timer_pass(&mut self, agents: &mut [Agent], now: Tick, rng: &mut SimRng) {
        for state in DiseaseState::ALL {
            if self.table.dwell(state).is_none() {
                continue;
            }
            let due: Vec<AgentId> = self.index[state.index()]
                .iter()
                .copied()
                .filter(|id| agents[id.index()].transition_due(now))
                .collect();
            for id in due {
                if state == DiseaseState::Quarantined {
                    self.release_quarantine(agents, id, now);
                } else if let Some(next) = self.table.sample_next(state, rng) {
                    self.change_state(agents, id, next, now);
                }
            }
        }
    }

    // ── False positives ───────────────────────────────────────────────────

    pub fn mark_false_positive(&mut self, id: AgentId) {
        self.false_positives.insert(id);
    }

    #[inline]
    pub fn is_false_positive(&self, id: AgentId) -> bool {
        self.false_positives.contains(&id)
    }

    #[inline]
    pub fn false_positive_count(&self) -> usize {
        self.false_positives.len()
    }

    // ── Invariant checks ──────────────────────────────────────────────────

    /// Verify the index matches every agent's own `state` field.
    /// O(states + agents); intended for tests and debug assertions.
    pub fn verify_index(&self, agents: &[Agent]) -> DiseaseResult<()> {
        let mut total = 0;
        for state in DiseaseState::ALL {
            for &id in &self.index[state.index()] {
                total += 1;
                let actual = agents
                    .get(id.index())
                    .map(|a| a.state)
                    .ok_or_else(|| DiseaseError::IndexDrift(format!("unknown agent {id}")))?;
                if actual != state {
                    return Err(DiseaseError::IndexDrift(format!(
                        "{id} indexed under {} but records {}",
                        state.label(),
                        actual.label()
                    )));
                }
            }
        }
        if total != agents.len() {
            return Err(DiseaseError::IndexDrift(format!(
                "index holds {total} agents, population is {}",
                agents.len()
            )));
        }
        Ok(())
    }
}
