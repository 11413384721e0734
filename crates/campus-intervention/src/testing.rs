//! The testing / quarantine protocol.
//!
//! Rounds test a group of agents and push the results onto a FIFO; a
//! release step matures the oldest round after the configured delay and
//! quarantines both true detections and false positives.  With
//! `delay > interval` the queue carries a backlog of `delay / interval`
//! rounds, always drained oldest-first.

use std::collections::VecDeque;

use log::info;

use campus_core::{AgentId, Archetype, DiseaseState, SimRng, Tick};
use campus_disease::DiseaseModel;
use campus_world::Agent;

use crate::config::{TestingConfig, TestingMode};

/// One round's matured results.
#[derive(Clone, Debug, Default)]
pub struct TestRound {
    pub detected: Vec<AgentId>,
    pub false_positives: Vec<AgentId>,
}

/// Round scheduling, subject selection, and the result FIFO.
#[derive(Debug)]
pub struct TestingProtocol {
    config: TestingConfig,
    /// Batch mode: the fixed partition, cycled in order.
    batches: Vec<Vec<AgentId>>,
    next_batch: usize,
    /// Random mode: the non-faculty pool sampled each round.
    pool: Vec<AgentId>,
    pending: VecDeque<TestRound>,
}

impl TestingProtocol {
    /// Partition (or pool) the population once at setup.
    pub fn new(config: TestingConfig, agents: &[Agent], rng: &mut SimRng) -> Self {
        let mut batches = Vec::new();
        let mut pool = Vec::new();
        match config.mode {
            TestingMode::Batch => {
                let mut students: Vec<AgentId> = agents
                    .iter()
                    .filter(|a| a.archetype == Archetype::Student)
                    .map(|a| a.id)
                    .collect();
                rng.shuffle(&mut students);
                for chunk in students.chunks(config.sample_size.max(1)) {
                    batches.push(chunk.to_vec());
                }
            }
            TestingMode::Random => {
                pool = agents
                    .iter()
                    .filter(|a| a.archetype != Archetype::Faculty)
                    .map(|a| a.id)
                    .collect();
            }
        }
        Self {
            config,
            batches,
            next_batch: 0,
            pool,
            pending: VecDeque::new(),
        }
    }

    /// `true` when a testing round fires this tick.
    pub fn round_due(&self, now: Tick) -> bool {
        now.0 % self.config.interval == 0 && now.0 > self.config.offset
    }

    /// `true` when the oldest pending round's results have matured.
    pub fn release_due(&self, now: Tick) -> bool {
        let Some(since) = now.0.checked_sub(self.config.delay) else {
            return false;
        };
        since % self.config.interval == 0 && now.0 > self.config.offset
    }

    /// Number of rounds still waiting for their results.
    pub fn backlog(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub(crate) fn batches_for_test(&self) -> &[Vec<AgentId>] {
        &self.batches
    }

    /// Test one group and queue its results.
    ///
    /// Susceptible subjects flag false-positive at the configured rate;
    /// infected subjects are detected unless a miss-rate draw fails, with
    /// the miss rate doubled for the fixed asymptomatic sub-state.  Other
    /// states consume no draws.
    pub fn run_round(&mut self, agents: &[Agent], now: Tick, rng: &mut SimRng) {
        let subjects: Vec<AgentId> = match self.config.mode {
            TestingMode::Batch => {
                if self.batches.is_empty() {
                    return;
                }
                let batch = self.batches[self.next_batch].clone();
                self.next_batch = (self.next_batch + 1) % self.batches.len();
                batch
            }
            TestingMode::Random => {
                rng.sample(&self.pool, self.config.sample_size.min(self.pool.len()))
            }
        };

        let mut round = TestRound::default();
        for id in subjects {
            let agent = &agents[id.index()];
            match agent.state {
                DiseaseState::Susceptible => {
                    if rng.uniform() < self.config.false_positive {
                        round.false_positives.push(id);
                    }
                }
                state if state.is_infected() => {
                    let coeff = if state == DiseaseState::InfectedAsymptomaticFixed {
                        self.config.fixed_miss_coeff
                    } else {
                        1.0
                    };
                    if rng.uniform() > coeff * self.config.false_negative {
                        round.detected.push(id);
                    }
                }
                _ => {}
            }
        }
        info!(
            "{now} testing round: {} detected, {} false positives",
            round.detected.len(),
            round.false_positives.len()
        );
        self.pending.push_back(round);
    }

    /// Release the oldest matured round, quarantining everyone in it.
    /// Returns the number of agents quarantined.
    pub fn release(
        &mut self,
        agents: &mut [Agent],
        disease: &mut DiseaseModel,
        now: Tick,
    ) -> usize {
        let Some(round) = self.pending.pop_front() else {
            return 0;
        };
        let total = round.detected.len() + round.false_positives.len();
        for id in round.detected {
            disease.change_state(agents, id, DiseaseState::Quarantined, now);
        }
        for id in round.false_positives {
            disease.change_state(agents, id, DiseaseState::Quarantined, now);
            disease.mark_false_positive(id);
        }
        if total > 0 {
            info!("{now} quarantined {total} agents ({} rounds backlogged)", self.pending.len());
        }
        total
    }
}
