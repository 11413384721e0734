//! Unit tests for campus-disease.

use campus_core::{AgentId, AgentKind, Archetype, DiseaseState, RoomId, SimRng, Tick};
use campus_schedule::WeekSchedule;
use campus_world::Agent;

use crate::{DiseaseError, DiseaseModel, TransitionTable};

use DiseaseState::*;

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn population(n: u32) -> Vec<Agent> {
    (0..n)
        .map(|i| {
            Agent::new(
                AgentId(i),
                Archetype::Student,
                AgentKind::OnCampus,
                RoomId(0),
                WeekSchedule::pinned(RoomId(0)),
            )
        })
        .collect()
}

fn model() -> DiseaseModel {
    DiseaseModel::new(TransitionTable::default()).unwrap()
}

// ── TransitionTable ───────────────────────────────────────────────────────────

mod table {
    use super::*;

    #[test]
    fn default_table_validates() {
        TransitionTable::default().validate().unwrap();
    }

    #[test]
    fn rejects_short_final_bound() {
        let mut table = TransitionTable::default();
        table.set_cdf(Exposed, vec![(InfectedAsymptomatic, 0.85)]);
        assert!(matches!(
            table.validate(),
            Err(DiseaseError::InvalidCdf { state: Exposed, .. })
        ));
    }

    #[test]
    fn rejects_decreasing_bounds() {
        let mut table = TransitionTable::default();
        table.set_cdf(
            Exposed,
            vec![(InfectedAsymptomatic, 0.9), (InfectedAsymptomaticFixed, 0.5)],
        );
        assert!(table.validate().is_err());
    }

    #[test]
    fn single_entry_skips_the_draw() {
        let table = TransitionTable::default();
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(1);

        assert_eq!(table.sample_next(InfectedSymptomaticMild, &mut a), Some(Recovered));
        // The stream was not consumed.
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn multi_entry_reads_in_declared_order() {
        let mut table = TransitionTable::default();
        // Degenerate split: the first bound already covers every draw, so
        // the second entry must never be reached.
        table.set_cdf(Exposed, vec![(InfectedAsymptomatic, 1.0), (InfectedAsymptomaticFixed, 1.0)]);
        let mut rng = SimRng::new(3);
        for _ in 0..32 {
            assert_eq!(table.sample_next(Exposed, &mut rng), Some(InfectedAsymptomatic));
        }
    }
}

// ── DiseaseModel ──────────────────────────────────────────────────────────────

mod model {
    use super::*;

    #[test]
    fn change_state_keeps_index_and_agent_in_lockstep() {
        let mut agents = population(3);
        let mut m = model();
        m.index_population(&agents);

        m.change_state(&mut agents, AgentId(1), Exposed, Tick(5));

        assert_eq!(agents[1].state, Exposed);
        assert_eq!(agents[1].last_update, Tick(5));
        assert_eq!(agents[1].dwell, Some(48));
        assert!(agents[1].infected);
        assert!(m.agents_in(Exposed).contains(&AgentId(1)));
        assert!(!m.agents_in(Susceptible).contains(&AgentId(1)));
        m.verify_index(&agents).unwrap();
    }

    #[test]
    fn counts_track_the_population() {
        let mut agents = population(4);
        let mut m = model();
        m.index_population(&agents);
        m.expose(&mut agents, AgentId(0), Tick(0));
        m.expose(&mut agents, AgentId(2), Tick(0));

        let counts = m.counts();
        assert_eq!(counts[Susceptible.index()], 2);
        assert_eq!(counts[Exposed.index()], 2);
        assert!(m.has_active_cases());
    }

    #[test]
    fn timer_pass_waits_out_the_dwell() {
        let mut agents = population(1);
        let mut m = model();
        m.index_population(&agents);
        let mut rng = SimRng::new(9);

        m.expose(&mut agents, AgentId(0), Tick(0));
        m.timer_pass(&mut agents, Tick(47), &mut rng);
        assert_eq!(agents[0].state, Exposed);

        // Eligible exactly at last_update + dwell.
        m.timer_pass(&mut agents, Tick(48), &mut rng);
        assert!(matches!(
            agents[0].state,
            InfectedAsymptomatic | InfectedAsymptomaticFixed
        ));
        assert_eq!(agents[0].last_update, Tick(48));
        m.verify_index(&agents).unwrap();
    }

    #[test]
    fn susceptible_and_recovered_never_fire_on_a_timer() {
        let mut agents = population(2);
        let mut m = model();
        m.index_population(&agents);
        let mut rng = SimRng::new(9);

        m.change_state(&mut agents, AgentId(1), Recovered, Tick(0));
        for t in 0..2000 {
            m.timer_pass(&mut agents, Tick(t), &mut rng);
        }
        assert_eq!(agents[0].state, Susceptible);
        assert_eq!(agents[1].state, Recovered);
    }

    #[test]
    fn false_positive_exits_quarantine_susceptible() {
        // Never exposed, falsely flagged, quarantined at tick 100 with the
        // default 336-tick dwell: susceptible again at tick 436.
        let mut agents = population(1);
        let mut m = model();
        m.index_population(&agents);
        let mut rng = SimRng::new(11);

        m.mark_false_positive(AgentId(0));
        m.change_state(&mut agents, AgentId(0), Quarantined, Tick(100));

        m.timer_pass(&mut agents, Tick(435), &mut rng);
        assert_eq!(agents[0].state, Quarantined);

        m.timer_pass(&mut agents, Tick(436), &mut rng);
        assert_eq!(agents[0].state, Susceptible);
        assert!(!m.is_false_positive(AgentId(0)));
    }

    #[test]
    fn true_case_exits_quarantine_recovered() {
        let mut agents = population(1);
        let mut m = model();
        m.index_population(&agents);
        let mut rng = SimRng::new(11);

        m.expose(&mut agents, AgentId(0), Tick(0));
        m.change_state(&mut agents, AgentId(0), Quarantined, Tick(10));
        m.timer_pass(&mut agents, Tick(10 + 336), &mut rng);
        assert_eq!(agents[0].state, Recovered);
    }

    #[test]
    fn seeding_moves_exactly_count_susceptibles() {
        let mut agents = population(20);
        let mut m = model();
        m.index_population(&agents);
        let mut rng = SimRng::new(2);

        m.seed_infections(&mut agents, Exposed, 5, Tick(0), &mut rng);
        assert_eq!(m.counts()[Exposed.index()], 5);
        assert_eq!(m.counts()[Susceptible.index()], 15);
        m.verify_index(&agents).unwrap();
    }

    #[test]
    fn verify_index_catches_out_of_band_mutation() {
        let mut agents = population(2);
        let mut m = model();
        m.index_population(&agents);

        agents[0].state = Recovered; // bypasses change_state
        assert!(m.verify_index(&agents).is_err());
    }
}
