//! Intervention configuration.

use campus_core::BuildingKind;

/// Which interventions are active for a run.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Toggles {
    pub masking: bool,
    pub testing: bool,
    pub closures: bool,
    /// `false` cancels faculty office hours (the pass does not run).
    pub office_hours: bool,
    /// `false` cancels the weekly large gathering.
    pub gatherings: bool,
    pub walk_in: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            masking: false,
            testing: false,
            closures: false,
            office_hours: true,
            gatherings: true,
            walk_in: false,
        }
    }
}

/// How testing rounds pick their subjects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestingMode {
    /// The student population is partitioned once into fixed groups and
    /// rounds cycle through them in order.
    Batch,
    /// Each round samples `sample_size` agents from the non-faculty pool.
    Random,
}

/// Testing / quarantine parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestingConfig {
    pub mode: TestingMode,
    /// Agents tested per round (and the batch size in batch mode).
    pub sample_size: usize,
    /// Probability a susceptible subject tests positive anyway.
    pub false_positive: f64,
    /// Probability an infected subject is missed.
    pub false_negative: f64,
    /// Miss-rate multiplier for the fixed asymptomatic sub-state.
    pub fixed_miss_coeff: f64,
    /// Ticks between result maturation and the round that produced them.
    pub delay: u64,
    /// Ticks between successive rounds.
    pub interval: u64,
    /// No rounds fire at or before this tick.
    pub offset: u64,
}

impl Default for TestingConfig {
    fn default() -> Self {
        Self {
            mode: TestingMode::Batch,
            sample_size: 400,
            false_positive: 0.03,
            false_negative: 0.001,
            fixed_miss_coeff: 2.0,
            delay: 0,
            interval: 24,
            offset: 24 + 9,
        }
    }
}

/// Building-closure parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureConfig {
    /// Kinds stripped from every schedule (agents stay home instead).
    pub closed_kinds: Vec<BuildingKind>,
    /// Kinds whose leaf rooms stop transmitting (`kv = 0`) while their
    /// hubs stay open.
    pub open_hub_kinds: Vec<BuildingKind>,
}

impl Default for ClosureConfig {
    fn default() -> Self {
        Self {
            closed_kinds: vec![BuildingKind::Gym, BuildingKind::Study],
            open_hub_kinds: vec![BuildingKind::Dining, BuildingKind::FacultyDining],
        }
    }
}

/// Walk-in self-reporting parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkinConfig {
    /// Hour of the day the daily check runs (weekdays only).
    pub hour: u64,
    /// Probability a mildly symptomatic agent self-reports.
    pub mild_p: f64,
    /// Probability a severely symptomatic agent self-reports.
    pub severe_p: f64,
}

impl Default for WalkinConfig {
    fn default() -> Self {
        Self { hour: 8, mild_p: 0.7, severe_p: 0.95 }
    }
}

/// The full intervention surface.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterventionConfig {
    pub toggles: Toggles,
    /// Fraction of the population assigned `compliance = true`.
    pub compliance_ratio: f64,
    /// Fraction flagged eligible for gatherings.
    pub gathering_ratio: f64,
    /// Fraction of students flagged as office-hour attendees.
    pub office_attendee_ratio: f64,
    pub testing: TestingConfig,
    pub closures: ClosureConfig,
    pub walkin: WalkinConfig,
}

impl InterventionConfig {
    /// The baseline campus scenario: gatherings eligible for half the
    /// population, everything else at the defaults.
    pub fn baseline() -> Self {
        Self {
            gathering_ratio: 0.5,
            ..Self::default()
        }
    }
}
