//! Schedule table types: `Slot`, `RawSchedule`, and `WeekSchedule`.

use campus_core::{DayKind, RoomId, HOURS_PER_DAY};

/// Rows in a weekly schedule (even, odd, weekend).
pub const ROWS: usize = 3;

/// Hours per schedule row.
pub const HOURS: usize = HOURS_PER_DAY as usize;

// ── Slot ──────────────────────────────────────────────────────────────────────

/// One unresolved schedule entry.
///
/// `Home` is a sentinel: the provider does not know which concrete room an
/// agent was placed in, so "be at home" is resolved per-agent at world
/// build time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// Resolved per-agent to the agent's initial room.
    Home,
    /// A concrete target room.
    Room(RoomId),
}

// ── RawSchedule ───────────────────────────────────────────────────────────────

/// A weekly schedule as delivered by the provider, before per-agent home
/// resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSchedule {
    pub rows: [[Slot; HOURS]; ROWS],
}

impl RawSchedule {
    /// A schedule that keeps the agent at home around the clock.
    pub fn all_home() -> Self {
        Self {
            rows: [[Slot::Home; HOURS]; ROWS],
        }
    }

    /// Substitute `Home` sentinels with `home` and produce the resolved
    /// table consumed by the movement automaton.
    pub fn resolve(&self, home: RoomId) -> WeekSchedule {
        let mut rows = [[RoomId::INVALID; HOURS]; ROWS];
        for (r, raw_row) in self.rows.iter().enumerate() {
            for (h, slot) in raw_row.iter().enumerate() {
                rows[r][h] = match slot {
                    Slot::Home => home,
                    Slot::Room(id) => *id,
                };
            }
        }
        WeekSchedule { rows }
    }
}

// ── WeekSchedule ──────────────────────────────────────────────────────────────

/// A fully resolved weekly room schedule: three 24-entry rows of target
/// rooms, indexed by day kind and hour of day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekSchedule {
    /// `rows[DayKind::row()][hour]`.
    pub rows: [[RoomId; HOURS]; ROWS],
}

impl WeekSchedule {
    /// A schedule pinning the agent to one room at all hours.
    pub fn pinned(room: RoomId) -> Self {
        Self {
            rows: [[room; HOURS]; ROWS],
        }
    }

    /// The scheduled target room for `(day_kind, hour)`.
    #[inline]
    pub fn room_at(&self, day_kind: DayKind, hour: u64) -> RoomId {
        self.rows[day_kind.row()][hour as usize % HOURS]
    }

    /// Replace every occurrence of `from` with `to`.
    ///
    /// Used by schedule-stripping closures (a closed gym becomes the
    /// agent's own room).
    pub fn replace_room(&mut self, from: RoomId, to: RoomId) {
        self.retarget(|room| if room == from { Some(to) } else { None });
    }

    /// Rewrite entries through `f`; entries for which `f` returns `None`
    /// are left untouched.
    pub fn retarget<F: Fn(RoomId) -> Option<RoomId>>(&mut self, f: F) {
        for row in &mut self.rows {
            for entry in row.iter_mut() {
                if let Some(new) = f(*entry) {
                    *entry = new;
                }
            }
        }
    }

    /// Iterator over all 72 entries (row-major), for validation.
    pub fn entries(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }
}
