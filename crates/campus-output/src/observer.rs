//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use campus_core::{DiseaseState, Tick};
use campus_infection::InfectionModel;
use campus_sim::SimObserver;
use campus_world::World;

use crate::row::{RoomInfectionRow, RunSummaryRow, StateCountRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams snapshot and end-of-run rows into any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(
        &mut self,
        tick: Tick,
        counts: &[u32; DiseaseState::COUNT],
        false_positives: u32,
    ) {
        let row = StateCountRow {
            tick: tick.0,
            counts: *counts,
            false_positives,
        };
        let result = self.writer.write_state_counts(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, world: &World, infection: &InfectionModel) {
        let rows: Vec<RoomInfectionRow> = world
            .rooms
            .iter()
            .map(|room| RoomInfectionRow {
                room_id: room.id.0,
                room_name: room.name.clone(),
                building_kind: room.kind.label(),
                exposures: room.infected_count,
            })
            .collect();
        let result = self.writer.write_room_infections(&rows);
        self.store_err(result);

        let summary = RunSummaryRow {
            final_tick: final_tick.0,
            office_hour_infections: infection.office_hour_infections,
            gathering_infections: infection.gathering_infections,
        };
        let result = self.writer.write_run_summary(&summary);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
