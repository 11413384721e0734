//! `campus-sim` — the hourly tick loop tying all components together.
//!
//! # Tick sequence
//!
//! ```text
//! for each tick (1 tick = 1 hour):
//!   ① Awake window (07:00–22:00, while cases remain):
//!        4 × (movement sub-step over all agents; hub infection pass)
//!        leaf-room infection pass
//!        timer transitions
//!        office-hour pass                  (when office hours are on)
//!   ② Weekly boundary: large-gathering event (when enabled)
//!   ③ Weekdays: walk-in check at the configured hour;
//!        testing round / FIFO release     (when testing is on)
//!   ④ Snapshot per-state counts           (every snapshot interval)
//! ```
//!
//! Day-kind reclassification happens inside the clock at day boundaries.
//! The whole loop is single-threaded and deterministic: one RNG stream,
//! fixed iteration orders, one draw per decision point.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use campus_core::SimConfig;
//! use campus_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .rooms(rooms)
//!     .agents(cohorts)
//!     .schedules(schedules)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
