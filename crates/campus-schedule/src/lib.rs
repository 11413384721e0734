//! `campus-schedule` — precomputed weekly room schedules for agents.
//!
//! The schedule provider is an external collaborator: something upstream
//! (a timetabling tool, a CSV export) decides where every agent should be
//! at every hour.  This crate only represents that table and loads it.
//!
//! # Table model
//!
//! Every agent carries a [`WeekSchedule`]: three parallel 24-entry rows of
//! target rooms, one row per [`DayKind`](campus_core::DayKind) (even day,
//! odd day, weekend).  The movement automaton looks up
//! `schedule.room_at(day_kind, hour)` each time an agent becomes eligible
//! to depart.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`table`]   | `Slot`, `RawSchedule`, `WeekSchedule`               |
//! | [`loader`]  | `load_schedules_csv`, `load_schedules_reader`       |
//! | [`error`]   | `ScheduleError`, `ScheduleResult<T>`                |

pub mod error;
pub mod loader;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_schedules_csv, load_schedules_reader};
pub use table::{RawSchedule, Slot, WeekSchedule};
