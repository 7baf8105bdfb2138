//! Unit tests for tower-core.

use crate::{SimRng, Tick, WallClock, add_minutes, minutes_to_clock};

mod minute_arithmetic {
    use super::*;

    #[test]
    fn add_minutes_wraps_at_midnight() {
        assert_eq!(add_minutes(1_430, 20), 10);
        assert_eq!(add_minutes(0, 1_440), 0);
        assert_eq!(add_minutes(720, 60), 780);
    }

    #[test]
    fn clock_formatting_is_twelve_hour() {
        assert_eq!(minutes_to_clock(0), "12:00 AM");
        assert_eq!(minutes_to_clock(6 * 60), "06:00 AM");
        assert_eq!(minutes_to_clock(12 * 60), "12:00 PM");
        assert_eq!(minutes_to_clock(13 * 60 + 5), "01:05 PM");
        assert_eq!(minutes_to_clock(23 * 60 + 59), "11:59 PM");
    }

    #[test]
    fn clock_formatting_wraps_past_day() {
        assert_eq!(minutes_to_clock(1_440 + 90), "01:30 AM");
    }
}

mod wall_clock {
    use super::*;

    #[test]
    fn default_clock_starts_at_six_am() {
        let clock = WallClock::default();
        assert_eq!(clock.iso8601(), "2024-01-01T06:00:00");
        assert_eq!(clock.minute_of_day(), 6 * 60);
    }

    #[test]
    fn advancing_crosses_midnight() {
        let mut clock = WallClock::from_civil(2024, 1, 1, 23, 50);
        clock.advance_minutes(20);
        assert_eq!(clock.iso8601(), "2024-01-02T00:10:00");
        assert_eq!(clock.minute_of_day(), 10);
    }

    #[test]
    fn leap_day_round_trips() {
        let clock = WallClock::from_civil(2024, 2, 29, 12, 30);
        assert_eq!(clock.iso8601(), "2024-02-29T12:30:00");
    }

    #[test]
    fn year_boundary_round_trips() {
        let mut clock = WallClock::from_civil(2023, 12, 31, 23, 59);
        clock.advance_minutes(1);
        assert_eq!(clock.iso8601(), "2024-01-01T00:00:00");
    }
}

mod tick {
    use super::*;

    #[test]
    fn offset_and_add_agree() {
        assert_eq!(Tick::ZERO.offset(5), Tick(5));
        assert_eq!(Tick(3) + 4, Tick(7));
    }
}

mod rng {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn choose_none_on_empty() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
