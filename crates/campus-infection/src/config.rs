//! Epidemiological configuration.

use campus_core::{BuildingKind, DiseaseState};

/// Large-gathering parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GatheringSpec {
    /// Simultaneous groups formed per event.
    pub groups: usize,
    pub min_size: usize,
    pub max_size: usize,
    /// The event no-ops when fewer flagged agents exist.
    pub min_attendees: usize,
}

impl Default for GatheringSpec {
    fn default() -> Self {
        Self {
            groups: 3,
            min_size: 20,
            max_size: 60,
            min_attendees: 50,
        }
    }
}

/// Infection-force parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpiConfig {
    /// Base transmission probability scaling every force formula.
    pub base_p: f64,
    /// Per-state infectivity weight (0 for non-infectious states).
    pub weights: [f64; DiseaseState::COUNT],
    /// Contribution multiplier for a compliant mask wearer where the mask
    /// policy applies.
    pub mask_multiplier: f64,
    /// Leaf-room building kinds where masks come off (and the multiplier
    /// therefore applies to compliant occupants).
    pub mask_exempt_kinds: Vec<BuildingKind>,
    /// Exposure probability for a susceptible agent returning to campus
    /// through the transit hub.
    pub off_campus_p: f64,
    /// Outbreak seeding: how many agents start in `seed_state`.
    pub seed_count: usize,
    pub seed_state: DiseaseState,
    pub gathering: GatheringSpec,
}

impl EpiConfig {
    #[inline]
    pub fn weight(&self, state: DiseaseState) -> f64 {
        self.weights[state.index()]
    }

    #[inline]
    pub fn is_mask_exempt(&self, kind: BuildingKind) -> bool {
        self.mask_exempt_kinds.contains(&kind)
    }
}

impl Default for EpiConfig {
    /// The baseline campus model parameters.
    fn default() -> Self {
        use DiseaseState::*;
        let mut weights = [0.0; DiseaseState::COUNT];
        weights[InfectedAsymptomatic.index()] = 0.5;
        weights[InfectedAsymptomaticFixed.index()] = 0.5;
        weights[InfectedSymptomaticMild.index()] = 1.0;
        weights[InfectedSymptomaticSevere.index()] = 1.0;

        Self {
            base_p: 1.25,
            weights,
            mask_multiplier: 0.5,
            mask_exempt_kinds: vec![
                BuildingKind::Dorm,
                BuildingKind::Dining,
                BuildingKind::FacultyDining,
            ],
            off_campus_p: 0.125 / 700.0,
            seed_count: 10,
            seed_state: Exposed,
            gathering: GatheringSpec::default(),
        }
    }
}
