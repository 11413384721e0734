//! CSV schedule loader.
//!
//! # CSV format
//!
//! Long format, one row per (agent, schedule row, hour):
//!
//! ```csv
//! agent_id,row,hour,room
//! 0,0,0,home
//! 0,0,8,12
//! 0,1,8,17
//! 1,2,20,home
//! ```
//!
//! | Column | Meaning                                             |
//! |--------|-----------------------------------------------------|
//! | `row`  | 0 = even day, 1 = odd day, 2 = weekend              |
//! | `hour` | 0–23                                                |
//! | `room` | `home` sentinel, or a `RoomId` as u32               |
//!
//! Hours absent from the file default to `home`; agents absent from the
//! file receive an all-home schedule.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use campus_core::RoomId;

use crate::table::{RawSchedule, Slot, HOURS, ROWS};
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScheduleRecord {
    agent_id: u32,
    row:      u8,
    hour:     u8,
    room:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load per-agent [`RawSchedule`]s from a CSV file.
///
/// Returns a `Vec` of length `agent_count`, indexed by `AgentId`.
pub fn load_schedules_csv(
    path: &Path,
    agent_count: usize,
) -> Result<Vec<RawSchedule>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_schedules_reader(file, agent_count)
}

/// Like [`load_schedules_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_schedules_reader<R: Read>(
    reader: R,
    agent_count: usize,
) -> Result<Vec<RawSchedule>, ScheduleError> {
    let mut schedules = vec![RawSchedule::all_home(); agent_count];

    let mut csv_reader = csv::Reader::from_reader(reader);
    for result in csv_reader.deserialize::<ScheduleRecord>() {
        let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;

        let agent = record.agent_id as usize;
        if agent >= agent_count {
            return Err(ScheduleError::Parse(format!(
                "agent_id {} out of range (agent count {agent_count})",
                record.agent_id
            )));
        }
        let row = record.row as usize;
        if row >= ROWS {
            return Err(ScheduleError::Parse(format!(
                "schedule row {} out of range (rows are 0=even, 1=odd, 2=weekend)",
                record.row
            )));
        }
        let hour = record.hour as usize;
        if hour >= HOURS {
            return Err(ScheduleError::Parse(format!(
                "hour {} out of range 0..24",
                record.hour
            )));
        }

        schedules[agent].rows[row][hour] = parse_slot(&record.room)?;
    }

    Ok(schedules)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_slot(s: &str) -> Result<Slot, ScheduleError> {
    match s.trim() {
        "home" => Ok(Slot::Home),
        n => n.parse::<u32>().map(|id| Slot::Room(RoomId(id))).map_err(|_| {
            ScheduleError::Parse(format!(
                "invalid room {n:?}: expected \"home\" or a RoomId (u32)"
            ))
        }),
    }
}
