//! In-memory snapshot history.

use campus_core::{DiseaseState, Tick};
use campus_sim::SimObserver;

use crate::row::StateCountRow;

/// A time-indexed history of per-state population counts.
///
/// Implements [`SimObserver`] directly, so it can be passed to
/// `Sim::run` to collect a run's trajectory without touching the
/// filesystem — the natural tool for parameter sweeps and tests.
#[derive(Debug, Default)]
pub struct StateSeries {
    entries: Vec<StateCountRow>,
}

impl StateSeries {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn entries(&self) -> &[StateCountRow] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last recorded snapshot.
    pub fn last(&self) -> Option<&StateCountRow> {
        self.entries.last()
    }

    /// The snapshot with the most agents in actively infectious states,
    /// ties resolved to the earliest tick.
    pub fn peak_infected(&self) -> Option<&StateCountRow> {
        self.entries
            .iter()
            .max_by(|a, b| {
                a.infected_total()
                    .cmp(&b.infected_total())
                    .then(b.tick.cmp(&a.tick))
            })
    }

    /// The count history of one state, in snapshot order.
    pub fn series_of(&self, state: DiseaseState) -> Vec<u32> {
        self.entries
            .iter()
            .map(|row| row.counts[state.index()])
            .collect()
    }
}

impl SimObserver for StateSeries {
    fn on_snapshot(
        &mut self,
        tick: Tick,
        counts: &[u32; DiseaseState::COUNT],
        false_positives: u32,
    ) {
        self.entries.push(StateCountRow {
            tick: tick.0,
            counts: *counts,
            false_positives,
        });
    }
}
