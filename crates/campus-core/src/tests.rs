//! Unit tests for campus-core.

use crate::{BuildingKind, DayKind, DiseaseState, SimClock, SimConfig, SimRng, Tick};

// ── Tick / DayKind ────────────────────────────────────────────────────────────

mod time {
    use super::*;

    #[test]
    fn hour_and_day_decomposition() {
        assert_eq!(Tick(0).hour_of_day(), 0);
        assert_eq!(Tick(0).day(), 0);
        assert_eq!(Tick(23).hour_of_day(), 23);
        assert_eq!(Tick(23).day(), 0);
        assert_eq!(Tick(24).hour_of_day(), 0);
        assert_eq!(Tick(24).day(), 1);
        assert_eq!(Tick(24 * 7 + 5).day(), 7);
    }

    #[test]
    fn week_splits_into_four_weekdays_and_three_weekend_days() {
        let kinds: Vec<DayKind> = (0..7).map(DayKind::of_day).collect();
        assert_eq!(
            kinds,
            vec![
                DayKind::Even,
                DayKind::Odd,
                DayKind::Even,
                DayKind::Odd,
                DayKind::Weekend,
                DayKind::Weekend,
                DayKind::Weekend,
            ]
        );
        // Second week repeats the pattern but day parity continues: day 7 is odd.
        assert_eq!(DayKind::of_day(7), DayKind::Odd);
        assert_eq!(DayKind::of_day(8), DayKind::Even);
    }

    #[test]
    fn schedule_rows_are_distinct() {
        assert_eq!(DayKind::Even.row(), 0);
        assert_eq!(DayKind::Odd.row(), 1);
        assert_eq!(DayKind::Weekend.row(), 2);
    }

    #[test]
    fn clock_refreshes_day_kind_at_boundaries() {
        let mut clock = SimClock::new();
        assert_eq!(clock.day_kind, DayKind::Even);
        for _ in 0..24 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(24));
        assert_eq!(clock.day_kind, DayKind::Odd);
        for _ in 0..(24 * 3) {
            clock.advance();
        }
        assert_eq!(clock.day_kind, DayKind::Weekend);
    }

    #[test]
    fn awake_window_bounds_are_inclusive() {
        let config = SimConfig::default();
        assert!(!config.is_awake_hour(6));
        assert!(config.is_awake_hour(7));
        assert!(config.is_awake_hour(22));
        assert!(!config.is_awake_hour(23));
    }

    #[test]
    fn end_tick_from_days() {
        let config = SimConfig {
            days: 10,
            ..SimConfig::default()
        };
        assert_eq!(config.end_tick(), Tick(240));
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

mod rng {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let draws_a: Vec<u64> = (0..8).map(|_| a.uniform().to_bits()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.uniform().to_bits()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn child_streams_are_independent_and_deterministic() {
        let mut root1 = SimRng::new(7);
        let mut root2 = SimRng::new(7);
        let mut c1 = root1.child(3);
        let mut c2 = root2.child(3);
        for _ in 0..10 {
            assert_eq!(c1.uniform().to_bits(), c2.uniform().to_bits());
        }
    }

    #[test]
    fn sample_without_replacement_is_distinct() {
        let mut rng = SimRng::new(9);
        let pool: Vec<u32> = (0..50).collect();
        let picked = rng.sample(&pool, 20);
        assert_eq!(picked.len(), 20);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 20);
    }
}

// ── DiseaseState / kinds ──────────────────────────────────────────────────────

mod state {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, s) in DiseaseState::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn infectious_entry_covers_exposed_and_infected() {
        assert!(DiseaseState::Exposed.is_infectious_entry());
        assert!(DiseaseState::InfectedSymptomaticSevere.is_infectious_entry());
        assert!(!DiseaseState::Susceptible.is_infectious_entry());
        assert!(!DiseaseState::Quarantined.is_infectious_entry());
        assert!(!DiseaseState::Recovered.is_infectious_entry());
    }

    #[test]
    fn infected_excludes_exposed() {
        assert!(!DiseaseState::Exposed.is_infected());
        assert!(DiseaseState::InfectedAsymptomatic.is_infected());
    }

    #[test]
    fn building_kind_labels_round_trip() {
        for kind in [
            BuildingKind::Classroom,
            BuildingKind::Dorm,
            BuildingKind::Dining,
            BuildingKind::FacultyDining,
            BuildingKind::Gym,
            BuildingKind::Library,
            BuildingKind::Office,
            BuildingKind::Social,
            BuildingKind::Study,
            BuildingKind::OffCampus,
        ] {
            assert_eq!(kind.label().parse::<BuildingKind>().unwrap(), kind);
        }
    }
}
