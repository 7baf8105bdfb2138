use tower_building::{Building, Floor, Location, LocationType, Unit, load_building};
use tower_core::{ResidentId, UnitId, WallClock};
use tower_population::{Persona, Resident, ResidentFactory};
use tower_schedule::{Activity, DaySchedule, ScheduleEvent};

use crate::events::{EVENT_LOG_CAPACITY, EventLog};
use crate::runtime::ResidentStatus;
use crate::sim::{ELEVATOR_X, SimConfig, Simulation};
use crate::snapshot::sunlight_at;
use crate::SimError;

fn test_unit(number: &str, floor: i32, position: f64) -> Unit {
    Unit {
        id: UnitId::INVALID,
        number: number.to_string(),
        floor,
        bedrooms: 1,
        square_feet: 900,
        rent: 2800,
        position,
        width: 0.16,
        depth: 0.5,
        room_type: "1br".to_string(),
        residents: Vec::new(),
    }
}

fn test_resident(id: u32, name: &str, home: UnitId, schedule: DaySchedule) -> Resident {
    Resident {
        id: ResidentId(id),
        name: name.to_string(),
        age: 30,
        occupation: "Engineer".to_string(),
        persona: Persona::UrbanProfessional,
        home_unit: home,
        schedule,
        mood: 0.5,
        hair_color: "#2f2c28".to_string(),
        outfit_color: "#1f6feb".to_string(),
        accent_color: "#22d3ee".to_string(),
    }
}

fn street() -> Location {
    Location::new(LocationType::Outside, "Street", Some(0), Some(0.18))
}

/// One resident on floor 5 who commutes to the street at minute 10 and
/// returns at minute 40; the clock starts at midnight.
fn test_simulation() -> Simulation {
    let mut building = Building::new(
        "Test Tower",
        "Nowhere",
        vec![Floor::new(0, "L"), Floor::new(5, "05")],
    );
    let home_id = building.add_unit(test_unit("0501", 5, 0.22));
    let home = building.home_location(home_id).unwrap();

    let schedule = DaySchedule::new(vec![
        ScheduleEvent::new(0, 10, Activity::Sleep, home.clone(), "Sleep"),
        ScheduleEvent::new(10, 20, Activity::Commute, street(), "Commute to street"),
        ScheduleEvent::new(20, 40, Activity::Away, street(), "Out and about"),
        ScheduleEvent::new(40, 50, Activity::Commute, home.clone(), "Return home"),
        ScheduleEvent::new(50, 1440, Activity::Sleep, home, "Sleep"),
    ]);
    let resident = test_resident(0, "Test Resident", home_id, schedule);
    building.add_resident(home_id, resident.id);

    let config = SimConfig {
        start: WallClock::from_civil(2024, 1, 1, 0, 0),
        tick_minutes: 1,
    };
    Simulation::with_config(building, vec![resident], config).unwrap()
}

fn advance_until(sim: &mut Simulation, limit: u32, predicate: impl Fn(&Simulation) -> bool) {
    for _ in 0..limit {
        sim.step();
        if predicate(sim) {
            return;
        }
    }
    panic!("condition not met within {limit} steps");
}

mod travel {
    use super::*;

    #[test]
    fn resident_waits_for_and_boards_elevator() {
        let mut sim = test_simulation();

        advance_until(&mut sim, 500, |sim| {
            sim.runtimes()[0].status == ResidentStatus::WaitingElevator
        });
        let record = &sim.runtimes()[0];
        assert!(record.elevator_request.is_some());
        assert_eq!(record.floor, 5);
        assert_eq!(record.location_label, "Elevator Lobby");

        advance_until(&mut sim, 500, |sim| {
            sim.runtimes()[0].status == ResidentStatus::InElevator
        });
        let record = &sim.runtimes()[0];
        assert!(record.elevator_request.is_none());
        assert_eq!(record.location_label, "Elevator");
        assert!((record.x - ELEVATOR_X).abs() < 1e-9);
        assert!((record.target_x - ELEVATOR_X).abs() < 1e-9);
        assert!((record.vertical_position - sim.elevator().position()).abs() < 1e-9);
    }

    #[test]
    fn resident_exits_at_destination() {
        let mut sim = test_simulation();

        advance_until(&mut sim, 500, |sim| {
            let record = &sim.runtimes()[0];
            record.status == ResidentStatus::InEvent && record.location_label == "Street"
        });
        let record = &sim.runtimes()[0];
        assert_eq!(record.floor, 0);
        assert_eq!(record.location_kind, LocationType::Outside);
        let destination = record.destination.as_ref().unwrap();
        assert_eq!(destination.label, "Street");
    }

    #[test]
    fn elevator_moves_smoothly() {
        let mut sim = test_simulation();
        let mut positions = Vec::new();

        for _ in 0..500 {
            sim.step();
            positions.push(sim.elevator().position());
            let record = &sim.runtimes()[0];
            if record.status == ResidentStatus::InEvent && record.location_label == "Street" {
                break;
            }
        }

        let limit = sim.elevator().speed_per_tick() + 1e-6;
        let deltas: Vec<f64> =
            positions.windows(2).map(|pair| (pair[1] - pair[0]).abs()).collect();
        assert!(!deltas.is_empty(), "elevator never moved");
        assert!(deltas.iter().any(|d| *d > 0.0), "elevator never moved");
        assert!(deltas.iter().all(|d| *d <= limit), "jump larger than one tick's speed");
    }

    #[test]
    fn round_trip_comes_home() {
        let mut sim = test_simulation();

        advance_until(&mut sim, 500, |sim| {
            let record = &sim.runtimes()[0];
            record.status == ResidentStatus::InEvent
                && record.floor == 5
                && record.location_kind == LocationType::Unit
                && sim.minute_of_day() > 40
        });
        let record = &sim.runtimes()[0];
        assert_eq!(record.location_label, "0501");
        assert!(record.elevator_request.is_none());
    }

    #[test]
    fn feed_narrates_the_trip() {
        let mut sim = test_simulation();
        sim.run_ticks(60);

        let snapshot = sim.state_snapshot();
        let descriptions: Vec<&str> =
            snapshot.events.iter().map(|e| e.description.as_str()).collect();
        assert!(descriptions.contains(&"Waiting for elevator to L"));
        assert!(descriptions.contains(&"Boarded elevator to L"));
        assert!(descriptions.contains(&"Arrived on floor L"));
        assert!(descriptions.contains(&"Out and about"));
        // The return trip books the car back up to floor 5.
        assert!(descriptions.contains(&"Waiting for elevator to 05"));
        assert!(descriptions.contains(&"Arrived on floor 05"));
    }
}

mod multi_resident {
    use super::*;

    /// Two residents on different floors both head for the street; the
    /// single car must serve both without losing either.
    #[test]
    fn both_residents_reach_the_street() {
        let mut building = Building::new(
            "Test Tower",
            "Nowhere",
            vec![Floor::new(0, "L"), Floor::new(2, "02"), Floor::new(8, "08")],
        );
        let low = building.add_unit(test_unit("0201", 2, 0.30));
        let high = building.add_unit(test_unit("0801", 8, 0.30));

        let mut residents = Vec::new();
        for (id, name, unit_id) in [(0, "Low Rider", low), (1, "High Rider", high)] {
            let home = building.home_location(unit_id).unwrap();
            let schedule = DaySchedule::new(vec![
                ScheduleEvent::new(0, 5, Activity::Sleep, home, "Sleep"),
                ScheduleEvent::new(5, 1440, Activity::Away, street(), "Out"),
            ]);
            let resident = test_resident(id, name, unit_id, schedule);
            building.add_resident(unit_id, resident.id);
            residents.push(resident);
        }

        let config = SimConfig {
            start: WallClock::from_civil(2024, 1, 1, 0, 0),
            tick_minutes: 1,
        };
        let mut sim = Simulation::with_config(building, residents, config).unwrap();

        advance_until(&mut sim, 200, |sim| {
            sim.runtimes().iter().all(|record| {
                record.status == ResidentStatus::InEvent && record.location_label == "Street"
            })
        });
        assert_eq!(sim.elevator().passenger_count(), 0);
    }
}

mod validation {
    use super::*;

    fn tiny_building() -> (Building, UnitId) {
        let mut building =
            Building::new("Test Tower", "Nowhere", vec![Floor::new(0, "L"), Floor::new(1, "01")]);
        let id = building.add_unit(test_unit("0101", 1, 0.2));
        (building, id)
    }

    fn all_day_home(building: &Building, unit: UnitId) -> DaySchedule {
        let home = building.home_location(unit).unwrap();
        DaySchedule::new(vec![ScheduleEvent::new(0, 1440, Activity::Sleep, home, "Sleep")])
    }

    #[test]
    fn rejects_out_of_order_ids() {
        let (building, unit) = tiny_building();
        let schedule = all_day_home(&building, unit);
        let resident = test_resident(3, "Offset", unit, schedule);
        let err = Simulation::new(building, vec![resident]).unwrap_err();
        assert!(matches!(err, SimError::MisnumberedResident { expected: 0, .. }));
    }

    #[test]
    fn rejects_unknown_home_unit() {
        let (building, unit) = tiny_building();
        let schedule = all_day_home(&building, unit);
        let resident = test_resident(0, "Homeless", UnitId(9), schedule);
        let err = Simulation::new(building, vec![resident]).unwrap_err();
        assert!(matches!(err, SimError::HomeUnitNotInBuilding { .. }));
    }

    #[test]
    fn rejects_gappy_schedule() {
        let (building, unit) = tiny_building();
        let home = building.home_location(unit).unwrap();
        let schedule = DaySchedule::new(vec![
            ScheduleEvent::new(0, 100, Activity::Sleep, home.clone(), "Sleep"),
            ScheduleEvent::new(200, 1440, Activity::Sleep, home, "Sleep"),
        ]);
        let resident = test_resident(0, "Gappy", unit, schedule);
        let err = Simulation::new(building, vec![resident]).unwrap_err();
        assert!(matches!(err, SimError::InvalidSchedule { .. }));
    }

    #[test]
    fn rejects_floor_the_building_lacks() {
        let (building, unit) = tiny_building();
        let home = building.home_location(unit).unwrap();
        let nowhere = Location::new(LocationType::Amenity, "Sky Deck", Some(7), Some(0.5));
        let schedule = DaySchedule::new(vec![
            ScheduleEvent::new(0, 100, Activity::Sleep, home.clone(), "Sleep"),
            ScheduleEvent::new(100, 200, Activity::Amenity, nowhere, "Float"),
            ScheduleEvent::new(200, 1440, Activity::Sleep, home, "Sleep"),
        ]);
        let resident = test_resident(0, "Dreamer", unit, schedule);
        let err = Simulation::new(building, vec![resident]).unwrap_err();
        assert!(matches!(err, SimError::UnknownDestinationFloor { floor: 7, .. }));
    }
}

mod mood {
    use super::*;

    #[test]
    fn sleeping_lifts_mood() {
        let mut sim = test_simulation();
        let before = sim.residents()[0].mood;
        sim.run_ticks(5);
        let after = sim.residents()[0].mood;
        assert!((after - (before + 5.0 * 0.002)).abs() < 1e-9);
    }

    #[test]
    fn mood_stays_clamped() {
        let mut sim = test_simulation();
        sim.run_ticks(1440);
        let mood = sim.residents()[0].mood;
        assert!((0.0..=1.0).contains(&mood));
    }
}

mod daylight {
    use super::*;

    #[test]
    fn noon_is_bright() {
        let noon = sunlight_at(12 * 60);
        assert!(noon.is_day);
        assert!(noon.sun_altitude > 0.9);
        assert!(noon.brightness > 0.9);
    }

    #[test]
    fn midnight_is_dark() {
        let midnight = sunlight_at(0);
        assert!(!midnight.is_day);
        assert!(midnight.sun_altitude < 0.0);
        assert!(midnight.brightness < 0.35);
    }

    #[test]
    fn dawn_and_dusk_boundaries_are_day() {
        for minute in [6 * 60, 19 * 60] {
            let light = sunlight_at(minute);
            assert!(light.is_day);
            assert!((light.brightness - 0.25).abs() < 1e-9);
            assert!(light.sun_altitude.abs() < 1e-9);
        }
    }
}

mod feed {
    use super::*;

    #[test]
    fn log_is_bounded_and_drops_oldest() {
        let mut log = EventLog::new();
        let clock = WallClock::default();
        for i in 0..EVENT_LOG_CAPACITY + 5 {
            log.record(clock, "Tester", format!("entry {i}"), "L");
        }
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(log.iter().next().unwrap().description, "entry 5");
    }
}

mod snapshots {
    use super::*;

    #[test]
    fn snapshot_is_pure() {
        let mut sim = test_simulation();
        sim.run_ticks(25);
        let first = serde_json::to_string(&sim.state_snapshot()).unwrap();
        let second = serde_json::to_string(&sim.state_snapshot()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_serializes_expected_shape() {
        let mut sim = test_simulation();
        sim.run_ticks(15);
        let value = serde_json::to_value(sim.state_snapshot()).unwrap();

        for key in [
            "timestamp",
            "minute_of_day",
            "clock",
            "activity_breakdown",
            "amenity_load",
            "residents",
            "events",
            "tick",
            "sunlight",
            "elevator",
            "building",
        ] {
            assert!(value.get(key).is_some(), "missing snapshot key {key}");
        }
        assert_eq!(value["tick"], 15);
        assert_eq!(value["residents"].as_array().unwrap().len(), 1);
        let resident = &value["residents"][0];
        assert_eq!(resident["persona"], "urban_professional");
        assert!(resident["status"].is_string());
        assert!(value["elevator"]["position"].is_number());
    }

    #[test]
    fn commuters_count_as_commute() {
        let mut sim = test_simulation();
        // Minute 12: mid-commute, somewhere between lobby wait and the car.
        sim.run_ticks(12);
        let snapshot = sim.state_snapshot();
        assert_eq!(snapshot.activity_breakdown.get("commute"), Some(&1));
    }

    #[test]
    fn outline_matches_building() {
        let sim = test_simulation();
        let snapshot = sim.state_snapshot();
        assert_eq!(snapshot.building.len(), 2);
        assert_eq!(snapshot.building[0].label, "L");
        assert_eq!(snapshot.building[1].units[0].unit, "0501");
    }

    #[test]
    fn full_building_runs_deterministically() {
        let run = || {
            let mut building = load_building();
            let residents = ResidentFactory::new(7).populate(&mut building);
            let mut sim = Simulation::new(building, residents).unwrap();
            sim.run_ticks(90);
            serde_json::to_string(&sim.state_snapshot()).unwrap()
        };
        assert_eq!(run(), run());
    }
}
