//! Unit tests for campus-schedule.

use std::io::Cursor;

use campus_core::{DayKind, RoomId};

use crate::{load_schedules_reader, RawSchedule, Slot, WeekSchedule};

// ── WeekSchedule ──────────────────────────────────────────────────────────────

mod table {
    use super::*;

    #[test]
    fn pinned_schedule_targets_one_room_everywhere() {
        let schedule = WeekSchedule::pinned(RoomId(3));
        for kind in [DayKind::Even, DayKind::Odd, DayKind::Weekend] {
            for hour in 0..24 {
                assert_eq!(schedule.room_at(kind, hour), RoomId(3));
            }
        }
    }

    #[test]
    fn room_at_selects_the_right_row() {
        let mut schedule = WeekSchedule::pinned(RoomId(0));
        schedule.rows[0][9] = RoomId(10); // even 09:00
        schedule.rows[1][9] = RoomId(11); // odd 09:00
        schedule.rows[2][9] = RoomId(12); // weekend 09:00

        assert_eq!(schedule.room_at(DayKind::Even, 9), RoomId(10));
        assert_eq!(schedule.room_at(DayKind::Odd, 9), RoomId(11));
        assert_eq!(schedule.room_at(DayKind::Weekend, 9), RoomId(12));
        assert_eq!(schedule.room_at(DayKind::Even, 8), RoomId(0));
    }

    #[test]
    fn replace_room_rewrites_every_occurrence() {
        let mut schedule = WeekSchedule::pinned(RoomId(5));
        schedule.rows[1][3] = RoomId(7);
        schedule.replace_room(RoomId(5), RoomId(1));

        assert_eq!(schedule.rows[1][3], RoomId(7));
        assert_eq!(schedule.entries().filter(|&r| r == RoomId(5)).count(), 0);
        assert_eq!(schedule.entries().filter(|&r| r == RoomId(1)).count(), 71);
    }

    #[test]
    fn resolve_substitutes_home() {
        let mut raw = RawSchedule::all_home();
        raw.rows[0][8] = Slot::Room(RoomId(42));
        let resolved = raw.resolve(RoomId(9));

        assert_eq!(resolved.room_at(DayKind::Even, 8), RoomId(42));
        assert_eq!(resolved.room_at(DayKind::Even, 7), RoomId(9));
        assert_eq!(resolved.room_at(DayKind::Weekend, 20), RoomId(9));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

mod loader {
    use super::*;

    #[test]
    fn loads_long_format_and_defaults_to_home() {
        let csv = "\
agent_id,row,hour,room
0,0,8,12
0,0,9,12
0,1,8,17
1,2,20,home
";
        let schedules = load_schedules_reader(Cursor::new(csv), 3).unwrap();
        assert_eq!(schedules.len(), 3);

        assert_eq!(schedules[0].rows[0][8], Slot::Room(RoomId(12)));
        assert_eq!(schedules[0].rows[1][8], Slot::Room(RoomId(17)));
        assert_eq!(schedules[0].rows[0][0], Slot::Home);
        // Agent 1 only has an explicit home entry; agent 2 none at all.
        assert_eq!(schedules[1].rows[2][20], Slot::Home);
        assert_eq!(schedules[2], RawSchedule::all_home());
    }

    #[test]
    fn rejects_out_of_range_agent() {
        let csv = "agent_id,row,hour,room\n5,0,0,home\n";
        let err = load_schedules_reader(Cursor::new(csv), 2).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn rejects_bad_row_and_hour() {
        let csv = "agent_id,row,hour,room\n0,3,0,home\n";
        assert!(load_schedules_reader(Cursor::new(csv), 1).is_err());

        let csv = "agent_id,row,hour,room\n0,0,24,home\n";
        assert!(load_schedules_reader(Cursor::new(csv), 1).is_err());
    }

    #[test]
    fn rejects_garbage_room() {
        let csv = "agent_id,row,hour,room\n0,0,0,work\n";
        let err = load_schedules_reader(Cursor::new(csv), 1).unwrap_err();
        assert!(err.to_string().contains("invalid room"));
    }
}
