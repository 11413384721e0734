//! The per-agent disease state.

use std::fmt;

/// Disease progression states.
///
/// The false-positive marker is deliberately *not* a state: it is a
/// bookkeeping set owned by the disease model, layered on top of
/// `Quarantined`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiseaseState {
    #[default]
    Susceptible,
    Exposed,
    InfectedAsymptomatic,
    /// Asymptomatic carriers that never develop symptoms; twice as hard to
    /// catch in testing rounds.
    InfectedAsymptomaticFixed,
    InfectedSymptomaticMild,
    InfectedSymptomaticSevere,
    Recovered,
    Quarantined,
}

impl DiseaseState {
    /// Number of states; per-state tables are arrays of this length.
    pub const COUNT: usize = 8;

    /// All states in index order.
    pub const ALL: [DiseaseState; Self::COUNT] = [
        DiseaseState::Susceptible,
        DiseaseState::Exposed,
        DiseaseState::InfectedAsymptomatic,
        DiseaseState::InfectedAsymptomaticFixed,
        DiseaseState::InfectedSymptomaticMild,
        DiseaseState::InfectedSymptomaticSevere,
        DiseaseState::Recovered,
        DiseaseState::Quarantined,
    ];

    /// Position in [`Self::ALL`], for indexing per-state tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for states that mark the agent as ever-infected on entry
    /// (consumed by the quarantine-exit rule).
    #[inline]
    pub fn is_infectious_entry(self) -> bool {
        matches!(
            self,
            DiseaseState::Exposed
                | DiseaseState::InfectedAsymptomatic
                | DiseaseState::InfectedAsymptomaticFixed
                | DiseaseState::InfectedSymptomaticMild
                | DiseaseState::InfectedSymptomaticSevere
        )
    }

    /// `true` for the actively infectious states counted by testing rounds.
    #[inline]
    pub fn is_infected(self) -> bool {
        matches!(
            self,
            DiseaseState::InfectedAsymptomatic
                | DiseaseState::InfectedAsymptomaticFixed
                | DiseaseState::InfectedSymptomaticMild
                | DiseaseState::InfectedSymptomaticSevere
        )
    }

    /// Human-readable label used in output files and logs.
    pub fn label(self) -> &'static str {
        match self {
            DiseaseState::Susceptible => "susceptible",
            DiseaseState::Exposed => "exposed",
            DiseaseState::InfectedAsymptomatic => "infected Asymptomatic",
            DiseaseState::InfectedAsymptomaticFixed => "infected Asymptomatic Fixed",
            DiseaseState::InfectedSymptomaticMild => "infected Symptomatic Mild",
            DiseaseState::InfectedSymptomaticSevere => "infected Symptomatic Severe",
            DiseaseState::Recovered => "recovered",
            DiseaseState::Quarantined => "quarantined",
        }
    }
}

impl fmt::Display for DiseaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
