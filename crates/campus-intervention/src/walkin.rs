//! Daily symptomatic walk-in self-reporting.

use log::info;

use campus_core::{AgentId, DiseaseState, SimRng, Tick};
use campus_disease::DiseaseModel;
use campus_world::Agent;

use crate::config::WalkinConfig;

/// Symptomatic agents who have shown symptoms for at least a day
/// self-report with a severity-keyed probability and, absent a
/// false-negative draw, go straight to quarantine.
///
/// Returns the number of agents quarantined.
pub fn walk_in_check(
    config: &WalkinConfig,
    false_negative: f64,
    agents: &mut [Agent],
    disease: &mut DiseaseModel,
    now: Tick,
    rng: &mut SimRng,
) -> u32 {
    let mut symptomatic: Vec<(AgentId, f64)> = Vec::new();
    for (state, p) in [
        (DiseaseState::InfectedSymptomaticMild, config.mild_p),
        (DiseaseState::InfectedSymptomaticSevere, config.severe_p),
    ] {
        symptomatic.extend(disease.agents_in(state).iter().map(|&id| (id, p)));
    }

    let mut quarantined = 0;
    for (id, p) in symptomatic {
        if now < agents[id.index()].last_update + 24 {
            continue; // symptoms too fresh to act on
        }
        if rng.uniform() < p && rng.uniform() > false_negative {
            disease.change_state(agents, id, DiseaseState::Quarantined, now);
            quarantined += 1;
        }
    }
    if quarantined > 0 {
        info!("{now} walk-in: {quarantined} agents self-reported into quarantine");
    }
    quarantined
}
