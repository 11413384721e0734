//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RoomInfectionRow, RunSummaryRow, StateCountRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// buffered by [`crate::SimOutputObserver`] and retrieved after the run.
pub trait OutputWriter {
    /// Write one snapshot of per-state population counts.
    fn write_state_counts(&mut self, row: &StateCountRow) -> OutputResult<()>;

    /// Write the end-of-run per-room exposure counters.
    fn write_room_infections(&mut self, rows: &[RoomInfectionRow]) -> OutputResult<()>;

    /// Write the end-of-run totals.
    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
