//! Per-state dwell times and transition CDFs.

use campus_core::{DiseaseState, SimRng};

use crate::{DiseaseError, DiseaseResult};

const CDF_TOLERANCE: f64 = 1e-9;

// ── Transition ────────────────────────────────────────────────────────────────

/// Dwell time and successor CDF for one state.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Minimum ticks in the state before a timer transition is eligible.
    /// `None` means the state never auto-expires.
    pub dwell: Option<u64>,
    /// Piecewise CDF over `[0, 1]`, read in declared order: the first
    /// entry whose cumulative bound exceeds the draw wins.  An empty list
    /// means the state has no successors.
    pub cdf: Vec<(DiseaseState, f64)>,
}

// ── TransitionTable ───────────────────────────────────────────────────────────

/// The full transition configuration, one [`Transition`] per state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionTable {
    entries: [Transition; DiseaseState::COUNT],
}

impl TransitionTable {
    #[inline]
    pub fn transition(&self, state: DiseaseState) -> &Transition {
        &self.entries[state.index()]
    }

    #[inline]
    pub fn dwell(&self, state: DiseaseState) -> Option<u64> {
        self.entries[state.index()].dwell
    }

    pub fn set_dwell(&mut self, state: DiseaseState, dwell: Option<u64>) {
        self.entries[state.index()].dwell = dwell;
    }

    pub fn set_cdf(&mut self, state: DiseaseState, cdf: Vec<(DiseaseState, f64)>) {
        self.entries[state.index()].cdf = cdf;
    }

    /// Check every non-empty CDF: bounds in `(0, 1]`, non-decreasing in
    /// declared order, final bound 1 within tolerance.  Fatal on failure —
    /// a run must not start with a malformed table.
    pub fn validate(&self) -> DiseaseResult<()> {
        for state in DiseaseState::ALL {
            let cdf = &self.entries[state.index()].cdf;
            let Some(&(_, last)) = cdf.last() else {
                continue;
            };
            let mut previous = 0.0;
            for &(next, bound) in cdf {
                if bound <= 0.0 || bound > 1.0 + CDF_TOLERANCE {
                    return Err(DiseaseError::InvalidCdf {
                        state,
                        reason: format!("bound {bound} for {next:?} outside (0, 1]"),
                    });
                }
                if bound < previous {
                    return Err(DiseaseError::InvalidCdf {
                        state,
                        reason: format!("bound {bound} for {next:?} decreases below {previous}"),
                    });
                }
                previous = bound;
            }
            if (last - 1.0).abs() > CDF_TOLERANCE {
                return Err(DiseaseError::InvalidCdf {
                    state,
                    reason: format!("final cumulative bound {last} != 1"),
                });
            }
        }
        Ok(())
    }

    /// Sample the successor of `state`.
    ///
    /// Single-entry lists are taken unconditionally without consuming a
    /// draw; multi-entry lists consume exactly one uniform and pick the
    /// first entry whose bound exceeds it, in declared order.
    pub fn sample_next(&self, state: DiseaseState, rng: &mut SimRng) -> Option<DiseaseState> {
        let cdf = &self.entries[state.index()].cdf;
        match cdf.len() {
            0 => None,
            1 => Some(cdf[0].0),
            _ => {
                let draw = rng.uniform();
                for &(next, bound) in cdf {
                    if draw < bound {
                        return Some(next);
                    }
                }
                cdf.last().map(|&(next, _)| next)
            }
        }
    }
}

impl Default for TransitionTable {
    /// The baseline campus model: 2-day incubation, 85/15 asymptomatic
    /// split, 10-day infectious periods, 14-day quarantine.
    fn default() -> Self {
        use DiseaseState::*;
        let mut table = Self {
            entries: std::array::from_fn(|_| Transition::default()),
        };

        table.set_dwell(Exposed, Some(2 * 24));
        table.set_dwell(InfectedAsymptomatic, Some(2 * 24));
        table.set_dwell(InfectedAsymptomaticFixed, Some(10 * 24));
        table.set_dwell(InfectedSymptomaticMild, Some(10 * 24));
        table.set_dwell(InfectedSymptomaticSevere, Some(10 * 24));
        table.set_dwell(Quarantined, Some(14 * 24));

        table.set_cdf(Susceptible, vec![(Exposed, 1.0)]);
        table.set_cdf(
            Exposed,
            vec![(InfectedAsymptomatic, 0.85), (InfectedAsymptomaticFixed, 1.0)],
        );
        table.set_cdf(
            InfectedAsymptomatic,
            vec![(InfectedSymptomaticMild, 0.5), (InfectedSymptomaticSevere, 1.0)],
        );
        table.set_cdf(InfectedAsymptomaticFixed, vec![(Recovered, 1.0)]);
        table.set_cdf(InfectedSymptomaticMild, vec![(Recovered, 1.0)]);
        table.set_cdf(InfectedSymptomaticSevere, vec![(Recovered, 1.0)]);
        // Quarantine exit is resolved by the model from the agent's
        // `infected` flag, not sampled from this list.
        table.set_cdf(Quarantined, vec![(Susceptible, 1.0)]);

        table
    }
}
