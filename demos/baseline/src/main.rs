//! baseline — a 60-day outbreak on a small synthetic campus.
//!
//! 130 students (100 on campus, 30 commuting) and 10 faculty move through
//! two dorms, a classroom building, a dining commons, a lounge, and a gym.
//! Testing and walk-in reporting are active; masking and closures are off.
//! Scale the cohort counts and room tables for a full-size campus.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use campus_core::{DiseaseState, RoomId, SimConfig, Tick};
use campus_infection::InfectionModel;
use campus_intervention::InterventionConfig;
use campus_output::{CsvWriter, OutputWriter, SimOutputObserver, StateSeries};
use campus_schedule::{RawSchedule, Slot};
use campus_sim::{SimBuilder, SimObserver};
use campus_world::{load_agents_reader, load_rooms_reader, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const SIM_DAYS:      u64 = 60;
const SNAPSHOT_EVERY: u64 = 24; // one row per simulated day

// ── Room table ────────────────────────────────────────────────────────────────

// Room ids are row indices; the constants below must track this table.
const ROOMS_CSV: &str = "\
room_name,building_name,building_type,connected_to,travel_time,capacity,kv\n\
transit_space_hub,transit_space,transit,,1,400,1.0\n\
offCampus_hub,off_campus,offCampus,transit_space_hub,1,400,0.0\n\
dorm_a_hub,dorm_a,dorm,transit_space_hub,1,200,1.0\n\
dorm_a_101,dorm_a,dorm,dorm_a_hub,1,60,1.0\n\
dorm_a_102,dorm_a,dorm,dorm_a_hub,1,60,1.0\n\
dorm_b_hub,dorm_b,dorm,transit_space_hub,1,200,1.0\n\
dorm_b_201,dorm_b,dorm,dorm_b_hub,1,60,1.0\n\
hall_hub,science_hall,classroom,transit_space_hub,1,200,1.0\n\
hall_110,science_hall,classroom,hall_hub,1,80,1.0\n\
hall_210,science_hall,classroom,hall_hub,1,80,1.0\n\
commons_hub,commons,dining,transit_space_hub,1,200,1.0\n\
commons_floor,commons,dining,commons_hub,1,150,1.0\n\
lounge_hub,student_lounge,social,transit_space_hub,1,200,1.0\n\
lounge_main,student_lounge,social,lounge_hub,1,100,1.0\n\
gym_hub,rec_center,gym,transit_space_hub,1,200,1.0\n\
gym_floor,rec_center,gym,gym_hub,1,80,1.0\n\
";

const HALL_110:      RoomId = RoomId(8);
const HALL_210:      RoomId = RoomId(9);
const COMMONS_FLOOR: RoomId = RoomId(11);
const LOUNGE_MAIN:   RoomId = RoomId(13);
const GYM_FLOOR:     RoomId = RoomId(15);

// ── Agent cohorts ─────────────────────────────────────────────────────────────

// Expansion order fixes agent ids: 0–59 dorm A, 60–99 dorm B,
// 100–129 commuters, 130–139 faculty.
const AGENTS_CSV: &str = "\
archetype,agent_type,initial_location,count\n\
student,onCampus,dorm_a,60\n\
student,onCampus,dorm_b,40\n\
student,offCampus,offCampus_hub,30\n\
faculty,faculty,offCampus_hub,10\n\
";

const STUDENT_COUNT: usize = 130;
const FACULTY_COUNT: usize = 10;

// ── Schedules ─────────────────────────────────────────────────────────────────

fn fill(row: &mut [Slot; 24], hours: std::ops::RangeInclusive<usize>, room: RoomId) {
    for h in hours {
        row[h] = Slot::Room(room);
    }
}

/// Resident student: meals in the commons, classes in the hall, an evening
/// in the lounge or the gym.  `section` alternates the classroom.
fn resident_schedule(section: usize) -> RawSchedule {
    let class = if section % 2 == 0 { HALL_110 } else { HALL_210 };
    let evening = if section % 3 == 0 { GYM_FLOOR } else { LOUNGE_MAIN };
    let mut raw = RawSchedule::all_home();
    for weekday in 0..2 {
        let row = &mut raw.rows[weekday];
        fill(row, 8..=8, COMMONS_FLOOR);
        fill(row, 9..=11, class);
        fill(row, 12..=12, COMMONS_FLOOR);
        fill(row, 13..=15, class);
        fill(row, 18..=18, COMMONS_FLOOR);
        fill(row, 19..=20, evening);
    }
    let weekend = &mut raw.rows[2];
    fill(weekend, 12..=12, COMMONS_FLOOR);
    fill(weekend, 15..=17, evening);
    raw
}

/// Commuter student: on campus for classes and lunch, home (off campus)
/// otherwise.
fn commuter_schedule(section: usize) -> RawSchedule {
    let class = if section % 2 == 0 { HALL_210 } else { HALL_110 };
    let mut raw = RawSchedule::all_home();
    for weekday in 0..2 {
        let row = &mut raw.rows[weekday];
        fill(row, 9..=11, class);
        fill(row, 12..=12, COMMONS_FLOOR);
        fill(row, 13..=15, class);
    }
    raw
}

/// Faculty: teaching hours in the hall on weekdays.
fn faculty_schedule(section: usize) -> RawSchedule {
    let class = if section % 2 == 0 { HALL_110 } else { HALL_210 };
    let mut raw = RawSchedule::all_home();
    for weekday in 0..2 {
        fill(&mut raw.rows[weekday], 9..=15, class);
    }
    raw
}

fn build_schedules() -> Vec<RawSchedule> {
    let mut schedules = Vec::with_capacity(STUDENT_COUNT + FACULTY_COUNT);
    for i in 0..100 {
        schedules.push(resident_schedule(i));
    }
    for i in 0..30 {
        schedules.push(commuter_schedule(i));
    }
    for i in 0..FACULTY_COUNT {
        schedules.push(faculty_schedule(i));
    }
    schedules
}

// ── Observer: CSV output + in-memory series ───────────────────────────────────

struct DemoObserver<W: OutputWriter> {
    inner:  SimOutputObserver<W>,
    series: StateSeries,
}

impl<W: OutputWriter> SimObserver for DemoObserver<W> {
    fn on_snapshot(
        &mut self,
        tick: Tick,
        counts: &[u32; DiseaseState::COUNT],
        false_positives: u32,
    ) {
        self.series.on_snapshot(tick, counts, false_positives);
        self.inner.on_snapshot(tick, counts, false_positives);
    }

    fn on_sim_end(&mut self, final_tick: Tick, world: &World, infection: &InfectionModel) {
        self.inner.on_sim_end(final_tick, world, infection);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== baseline — campus_abm epidemic simulator ===");
    println!(
        "Agents: {}  |  Days: {SIM_DAYS}  |  Seed: {SEED}",
        STUDENT_COUNT + FACULTY_COUNT
    );
    println!();

    let rooms = load_rooms_reader(Cursor::new(ROOMS_CSV))?;
    let cohorts = load_agents_reader(Cursor::new(AGENTS_CSV))?;
    println!("Loaded {} rooms, {} cohorts", rooms.len(), cohorts.len());

    let mut interventions = InterventionConfig::baseline();
    interventions.toggles.testing = true;
    interventions.toggles.walk_in = true;
    interventions.testing.sample_size = 50;
    interventions.office_attendee_ratio = 0.3;

    let config = SimConfig {
        days: SIM_DAYS,
        seed: SEED,
        snapshot_interval_ticks: SNAPSHOT_EVERY,
        ..SimConfig::default()
    };

    let mut sim = SimBuilder::new(config)
        .rooms(rooms)
        .agents(cohorts)
        .schedules(build_schedules())
        .interventions(interventions)
        .build()?;

    std::fs::create_dir_all("output/baseline")?;
    let writer = CsvWriter::new(Path::new("output/baseline"))?;
    let mut obs = DemoObserver {
        inner:  SimOutputObserver::new(writer),
        series: StateSeries::new(),
    };

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    if let Some(peak) = obs.series.peak_infected() {
        println!(
            "Peak infections: {} agents at tick {} (day {})",
            peak.infected_total(),
            peak.tick,
            peak.tick / 24
        );
    }

    println!();
    println!("{:<30} {:>8}", "Final state", "Agents");
    println!("{}", "-".repeat(40));
    let counts = sim.disease().counts();
    for state in DiseaseState::ALL {
        println!("{:<30} {:>8}", state.label(), counts[state.index()]);
    }
    println!(
        "{:<30} {:>8}",
        "false positives quarantined",
        sim.disease().false_positive_count()
    );
    println!();
    println!(
        "Office-hour infections: {}  |  Gathering infections: {}",
        sim.infection().office_hour_infections,
        sim.infection().gathering_infections
    );
    println!("Output written to output/baseline/");

    Ok(())
}
