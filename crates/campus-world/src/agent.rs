//! The `Agent` record.
//!
//! All fields are declared up front (nothing is attached dynamically at
//! run time).  Agents are created once at world build and never destroyed;
//! only state, location, and the transient movement fields mutate.

use campus_core::{AgentId, AgentKind, Archetype, DiseaseState, Motion, RoomId, Tick};
use campus_schedule::WeekSchedule;

/// One simulated person.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id: AgentId,
    pub archetype: Archetype,
    pub kind: AgentKind,

    // ── Location / movement ───────────────────────────────────────────────
    /// The room the agent was initially placed in; quarantine and severe
    /// symptoms route here.
    pub home: RoomId,
    /// Current room.  The room's occupancy set holds this agent's id.
    pub room: RoomId,
    /// Target room of the journey in progress (meaningful while moving).
    pub destination: RoomId,
    /// Remaining hub/room hops, popped from the back.  At most 3 entries
    /// right after a cross-building destination is chosen.
    pub path: Vec<RoomId>,
    pub motion: Motion,
    /// Tick at which the current dwell or transit hop began.
    pub arrival_time: Tick,
    /// Travel time of the pending hop; the hop fires once
    /// `now >= arrival_time + travel_time`.
    pub travel_time: u64,

    // ── Disease ───────────────────────────────────────────────────────────
    pub state: DiseaseState,
    /// Tick of the last disease-state change.
    pub last_update: Tick,
    /// Minimum dwell in the current state before the next transition is
    /// eligible.  `None` means the state never auto-expires.
    pub dwell: Option<u64>,
    /// Ever entered an infectious state; disambiguates quarantine exit.
    pub infected: bool,

    // ── Intervention flags ────────────────────────────────────────────────
    /// Wears a mask when the masking intervention is active.
    pub compliance: bool,
    /// Eligible for weekly large gatherings.
    pub gathering: bool,
    /// Attends faculty office hours.
    pub office_attendee: bool,

    // ── Schedule ──────────────────────────────────────────────────────────
    pub schedule: WeekSchedule,
}

impl Agent {
    /// A freshly placed, susceptible, stationary agent.
    pub fn new(
        id: AgentId,
        archetype: Archetype,
        kind: AgentKind,
        home: RoomId,
        schedule: WeekSchedule,
    ) -> Self {
        Self {
            id,
            archetype,
            kind,
            home,
            room: home,
            destination: RoomId::INVALID,
            path: Vec::new(),
            motion: Motion::Stationary,
            arrival_time: Tick::ZERO,
            travel_time: 0,
            state: DiseaseState::Susceptible,
            last_update: Tick::ZERO,
            dwell: None,
            infected: false,
            compliance: false,
            gathering: false,
            office_attendee: false,
            schedule,
        }
    }

    /// The earliest tick at which a timer transition is eligible, or
    /// `None` if the current state never auto-expires.
    #[inline]
    pub fn transition_deadline(&self) -> Option<Tick> {
        self.dwell.map(|d| self.last_update + d)
    }

    /// `true` once the minimum dwell in the current state has elapsed.
    #[inline]
    pub fn transition_due(&self, now: Tick) -> bool {
        match self.transition_deadline() {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }
}
