//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `state_counts.csv`
//! - `room_infections.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoomInfectionRow, RunSummaryRow, StateCountRow};

/// Column names for the per-state counts, in `DiseaseState::index()` order.
pub const STATE_COLUMNS: [&str; 8] = [
    "susceptible",
    "exposed",
    "infected_asymptomatic",
    "infected_asymptomatic_fixed",
    "infected_symptomatic_mild",
    "infected_symptomatic_severe",
    "recovered",
    "quarantined",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    state_counts:    Writer<File>,
    room_infections: Writer<File>,
    run_summary:     Writer<File>,
    finished:        bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut state_counts = Writer::from_path(dir.join("state_counts.csv"))?;
        let mut header = vec!["tick"];
        header.extend(STATE_COLUMNS);
        header.push("false_positives");
        state_counts.write_record(&header)?;

        let mut room_infections = Writer::from_path(dir.join("room_infections.csv"))?;
        room_infections.write_record(["room_id", "room_name", "building_kind", "exposures"])?;

        let mut run_summary = Writer::from_path(dir.join("run_summary.csv"))?;
        run_summary.write_record(["final_tick", "office_hour_infections", "gathering_infections"])?;

        Ok(Self {
            state_counts,
            room_infections,
            run_summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_state_counts(&mut self, row: &StateCountRow) -> OutputResult<()> {
        let mut record = vec![row.tick.to_string()];
        record.extend(row.counts.iter().map(u32::to_string));
        record.push(row.false_positives.to_string());
        self.state_counts.write_record(&record)?;
        Ok(())
    }

    fn write_room_infections(&mut self, rows: &[RoomInfectionRow]) -> OutputResult<()> {
        for row in rows {
            self.room_infections.write_record(&[
                row.room_id.to_string(),
                row.room_name.clone(),
                row.building_kind.to_string(),
                row.exposures.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.run_summary.write_record(&[
            row.final_tick.to_string(),
            row.office_hour_infections.to_string(),
            row.gathering_infections.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.state_counts.flush()?;
        self.room_infections.flush()?;
        self.run_summary.flush()?;
        Ok(())
    }
}
