//! `campus-intervention` — the policy layer.
//!
//! Interventions never run their own dynamics; each one modifies the
//! inputs of the movement, disease, or infection components:
//!
//! - **masking** flips agents' `compliance` flags (the infection model
//!   reads them);
//! - **testing/quarantine** feeds detections through a delayed FIFO into
//!   the disease model;
//! - **closures** rewrite schedules or zero room `kv`;
//! - **walk-ins** move symptomatic self-reporters straight to quarantine;
//! - the gathering toggle gates the infection model's weekly pass.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`config`]   | `InterventionConfig`, `Toggles`, per-policy configs  |
//! | [`assign`]   | exact-fraction boolean flag assignment               |
//! | [`testing`]  | `TestingProtocol` (rounds, FIFO release queue)       |
//! | [`closures`] | schedule stripping, leaf-closed/hub-open `kv` zeroing|
//! | [`walkin`]   | daily symptomatic self-reporting                     |

pub mod assign;
pub mod closures;
pub mod config;
pub mod testing;
pub mod walkin;


pub use assign::{assign_compliance, assign_gathering, assign_office_attendees};
pub use closures::{close_leaf_open_hub, strip_closed_kinds};
pub use config::{ClosureConfig, InterventionConfig, TestingConfig, TestingMode, Toggles, WalkinConfig};
pub use testing::TestingProtocol;
pub use walkin::walk_in_check;
