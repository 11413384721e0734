//! Exact-fraction boolean flag assignment.
//!
//! A shuffled indicator vector with exactly `⌊n * ratio⌋` ones, so the
//! assigned count is deterministic and only the selection is random.

use campus_core::SimRng;
use campus_world::Agent;

fn indicator(n: usize, ratio: f64, rng: &mut SimRng) -> Vec<bool> {
    let ones = (n as f64 * ratio.clamp(0.0, 1.0)) as usize;
    let mut flags: Vec<bool> = (0..n).map(|i| i < ones).collect();
    rng.shuffle(&mut flags);
    flags
}

/// Assign mask `compliance` to an exact fraction of the population.
pub fn assign_compliance(agents: &mut [Agent], ratio: f64, rng: &mut SimRng) {
    let flags = indicator(agents.len(), ratio, rng);
    for (agent, flag) in agents.iter_mut().zip(flags) {
        agent.compliance = flag;
    }
}

/// Flag an exact fraction of the population as gathering-eligible.
pub fn assign_gathering(agents: &mut [Agent], ratio: f64, rng: &mut SimRng) {
    let flags = indicator(agents.len(), ratio, rng);
    for (agent, flag) in agents.iter_mut().zip(flags) {
        agent.gathering = flag;
    }
}

/// Flag an exact fraction of the population as office-hour attendees.
pub fn assign_office_attendees(agents: &mut [Agent], ratio: f64, rng: &mut SimRng) {
    let flags = indicator(agents.len(), ratio, rng);
    for (agent, flag) in agents.iter_mut().zip(flags) {
        agent.office_attendee = flag;
    }
}
