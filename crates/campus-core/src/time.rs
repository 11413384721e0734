//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter where one tick is one
//! simulated hour.  All schedule arithmetic is exact integer math: hour of
//! day is `tick % 24`, the simulated day is `tick / 24`, and the weekly
//! schedule cycle is 168 ticks.
//!
//! The week is split into a four-day working stretch (days 0–3 of each
//! week, alternating [`DayKind::Even`] and [`DayKind::Odd`]) and a
//! three-day weekend (days 4–6).  Agents consult a different schedule row
//! for each of the three kinds.

use std::fmt;

/// Hours in one simulated day.
pub const HOURS_PER_DAY: u64 = 24;

/// Ticks in one simulated week.
pub const TICKS_PER_WEEK: u64 = 7 * HOURS_PER_DAY;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (1 tick = 1 hour).
///
/// Stored as `u64`; at 1 tick/hour a u64 outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// Hour of the simulated day in `0..24`.
    #[inline]
    pub fn hour_of_day(self) -> u64 {
        self.0 % HOURS_PER_DAY
    }

    /// The simulated day this tick falls in (day 0 = ticks 0..24).
    #[inline]
    pub fn day(self) -> u64 {
        self.0 / HOURS_PER_DAY
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── DayKind ───────────────────────────────────────────────────────────────────

/// Classification of a simulated day, selecting which of the three weekly
/// schedule rows an agent consults.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// A working day with even parity (days 0 and 2 of the week).
    Even,
    /// A working day with odd parity (days 1 and 3 of the week).
    Odd,
    /// Days 4–6 of the week.
    Weekend,
}

impl DayKind {
    /// Classify a simulated day counter.
    pub fn of_day(day: u64) -> DayKind {
        if day % 7 > 3 {
            DayKind::Weekend
        } else if day % 2 == 0 {
            DayKind::Even
        } else {
            DayKind::Odd
        }
    }

    /// Classify the day containing `tick`.
    #[inline]
    pub fn of_tick(tick: Tick) -> DayKind {
        DayKind::of_day(tick.day())
    }

    /// `true` for the four working days of the week.
    #[inline]
    pub fn is_weekday(self) -> bool {
        self != DayKind::Weekend
    }

    /// Index of the schedule row for this kind (even 0, odd 1, weekend 2).
    #[inline]
    pub fn row(self) -> usize {
        match self {
            DayKind::Even => 0,
            DayKind::Odd => 1,
            DayKind::Weekend => 2,
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayKind::Even => "even",
            DayKind::Odd => "odd",
            DayKind::Weekend => "weekend",
        };
        write!(f, "{s}")
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The hourly clock driving a run.
///
/// `day_kind` is recomputed at every day boundary by [`SimClock::advance`]
/// so the movement automaton can read it without re-deriving it per agent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Day classification of `current_tick`'s day.
    pub day_kind: DayKind,
}

impl SimClock {
    /// A clock positioned at tick 0.
    pub fn new() -> Self {
        Self {
            current_tick: Tick::ZERO,
            day_kind: DayKind::of_day(0),
        }
    }

    /// Advance the clock by one tick, refreshing `day_kind` at day
    /// boundaries.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        if self.current_tick.0 % HOURS_PER_DAY == 0 {
            self.day_kind = DayKind::of_tick(self.current_tick);
        }
    }

    #[inline]
    pub fn hour_of_day(&self) -> u64 {
        self.current_tick.hour_of_day()
    }

    #[inline]
    pub fn day(&self) -> u64 {
        self.current_tick.day()
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (day {} {:02}:00, {})",
            self.current_tick,
            self.day(),
            self.hour_of_day(),
            self.day_kind
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Constructed by the application (or deserialized with the `serde`
/// feature) and passed to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated days to run.  Total ticks = `days * 24`.
    pub days: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Record per-state population counts every N ticks.  0 disables
    /// snapshots entirely.
    pub snapshot_interval_ticks: u64,

    /// Hours of the day (inclusive range) during which agents move and
    /// room infection runs.  Outside this window only interventions fire.
    pub awake_hours: (u64, u64),

    /// Name of the global transit hub room in the room table.
    pub transit_name: String,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.days * HOURS_PER_DAY)
    }

    /// `true` if `hour` falls inside the awake window.
    #[inline]
    pub fn is_awake_hour(&self, hour: u64) -> bool {
        hour >= self.awake_hours.0 && hour <= self.awake_hours.1
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: 100,
            seed: 0,
            snapshot_interval_ticks: 1,
            awake_hours: (7, 22),
            transit_name: "transit_space_hub".to_string(),
        }
    }
}
