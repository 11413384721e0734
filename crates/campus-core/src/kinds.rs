//! Small shared enums for world and agent classification.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── BuildingKind ──────────────────────────────────────────────────────────────

/// The functional type of a building (and, transitively, of its rooms).
///
/// Intervention configuration refers to buildings by kind: mask-exempt
/// kinds, closed kinds, open-hub kinds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingKind {
    Classroom,
    Dorm,
    Dining,
    FacultyDining,
    Gym,
    Library,
    Office,
    Social,
    Study,
    /// The transit network connecting all buildings.
    Transit,
    /// The off-campus world; its rooms never run infection passes.
    OffCampus,
}

impl BuildingKind {
    /// Label matching the `building_type` column of the input tables.
    pub fn label(self) -> &'static str {
        match self {
            BuildingKind::Classroom => "classroom",
            BuildingKind::Dorm => "dorm",
            BuildingKind::Dining => "dining",
            BuildingKind::FacultyDining => "faculty_dining_room",
            BuildingKind::Gym => "gym",
            BuildingKind::Library => "library",
            BuildingKind::Office => "office",
            BuildingKind::Social => "social",
            BuildingKind::Study => "study",
            BuildingKind::Transit => "transit",
            BuildingKind::OffCampus => "offCampus",
        }
    }
}

impl FromStr for BuildingKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "classroom" => Ok(BuildingKind::Classroom),
            "dorm" => Ok(BuildingKind::Dorm),
            "dining" => Ok(BuildingKind::Dining),
            "faculty_dining_room" | "faculty_dining_hall" => Ok(BuildingKind::FacultyDining),
            "gym" => Ok(BuildingKind::Gym),
            "library" => Ok(BuildingKind::Library),
            "office" => Ok(BuildingKind::Office),
            "social" => Ok(BuildingKind::Social),
            "study" => Ok(BuildingKind::Study),
            "transit" | "transit_space" => Ok(BuildingKind::Transit),
            "offCampus" | "off_campus" => Ok(BuildingKind::OffCampus),
            other => Err(CoreError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Archetype / AgentKind ─────────────────────────────────────────────────────

/// Coarse agent archetype.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    Student,
    Faculty,
}

/// Agent subtype, refining [`Archetype`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    OnCampus,
    OffCampus,
    Faculty,
}

impl FromStr for Archetype {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "student" => Ok(Archetype::Student),
            "faculty" => Ok(Archetype::Faculty),
            other => Err(CoreError::UnknownKind(other.to_string())),
        }
    }
}

impl FromStr for AgentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "onCampus" | "on_campus" => Ok(AgentKind::OnCampus),
            "offCampus" | "off_campus" => Ok(AgentKind::OffCampus),
            "faculty" => Ok(AgentKind::Faculty),
            other => Err(CoreError::UnknownKind(other.to_string())),
        }
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Movement automaton motion mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    #[default]
    Stationary,
    Moving,
}
