//! `campus-output` — recorders and file writers for simulation runs.
//!
//! Two consumers of the observer hooks are provided:
//!
//! | Type                | Purpose                                          |
//! |---------------------|--------------------------------------------------|
//! | [`StateSeries`]     | in-memory per-state count history, for analysis  |
//! | [`SimOutputObserver`] | streams rows into an [`OutputWriter`] backend  |
//!
//! The only backend is CSV ([`CsvWriter`]), producing three files in the
//! output directory:
//!
//! - `state_counts.csv` — one row per snapshot: population per disease
//!   state plus the quarantined-false-positive count;
//! - `room_infections.csv` — one row per room at run end: cumulative
//!   exposures produced in that room;
//! - `run_summary.csv` — one row: final tick and the office-hour and
//!   gathering pass tallies.
//!
//! Observer methods have no return value, so writer errors are buffered
//! and surfaced after the run through
//! [`SimOutputObserver::take_error`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use campus_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod series;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RoomInfectionRow, RunSummaryRow, StateCountRow};
pub use series::StateSeries;
pub use writer::OutputWriter;
