//! Plain data row types written by output backends.

use campus_core::DiseaseState;

/// Per-state population counts at one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCountRow {
    pub tick: u64,
    /// Indexed by `DiseaseState::index()`.
    pub counts: [u32; DiseaseState::COUNT],
    /// Quarantined agents whose positive test was spurious.
    pub false_positives: u32,
}

impl StateCountRow {
    /// Total population across all states.
    pub fn population(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Agents in any actively infectious state.
    pub fn infected_total(&self) -> u32 {
        DiseaseState::ALL
            .iter()
            .filter(|s| s.is_infected())
            .map(|s| self.counts[s.index()])
            .sum()
    }
}

/// Cumulative exposures produced in one room over the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfectionRow {
    pub room_id: u32,
    pub room_name: String,
    pub building_kind: &'static str,
    pub exposures: u32,
}

/// End-of-run totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub final_tick: u64,
    pub office_hour_infections: u32,
    pub gathering_infections: u32,
}
