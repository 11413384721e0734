//! Observation hooks into a running simulation.
//!
//! The loop itself never does I/O; anything that wants to record a run
//! (CSV writers, progress bars, assertions in tests) implements
//! [`SimObserver`] and is handed read-only views at fixed points of the
//! tick sequence.

use campus_core::{DiseaseState, Tick};
use campus_infection::InfectionModel;
use campus_world::World;

/// Callbacks invoked by [`crate::Sim::run`].
///
/// All methods have default no-op implementations; implement only the
/// hooks you need.
pub trait SimObserver {
    /// Called at the top of every tick, before any pass runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of every tick with the number of new exposures
    /// produced during it.
    fn on_tick_end(&mut self, _tick: Tick, _exposures: u32) {}

    /// Called every snapshot interval with the per-state population counts
    /// (indexed by `DiseaseState::index()`) and the current number of
    /// quarantined false positives.
    fn on_snapshot(
        &mut self,
        _tick: Tick,
        _counts: &[u32; DiseaseState::COUNT],
        _false_positives: u32,
    ) {
    }

    /// Called once after the final tick, with the world (per-room exposure
    /// counters included) and the infection model (pass tallies).
    fn on_sim_end(&mut self, _final_tick: Tick, _world: &World, _infection: &InfectionModel) {}
}

/// An observer that ignores every event.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
