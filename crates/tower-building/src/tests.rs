//! Unit tests for tower-building.

use crate::{Amenity, Building, Floor, Location, LocationType, Unit, load_building};
use tower_core::{ResidentId, UnitId};

fn small_building() -> Building {
    let mut b = Building::new(
        "Test Tower",
        "Nowhere",
        vec![Floor::new(0, "L"), Floor::new(5, "05")],
    );
    b.add_unit(Unit {
        id: UnitId::INVALID,
        number: "0501".to_string(),
        floor: 5,
        bedrooms: 1,
        square_feet: 900,
        rent: 2_800,
        position: 0.22,
        width: 0.18,
        depth: 0.24,
        room_type: "unit_1br".to_string(),
        residents: Vec::new(),
    });
    b
}

mod arena {
    use super::*;

    #[test]
    fn add_unit_assigns_arena_index_and_registers_on_floor() {
        let b = small_building();
        let unit = b.unit(UnitId(0)).unwrap();
        assert_eq!(unit.id, UnitId(0));
        assert_eq!(b.floor(5).unwrap().units, vec![UnitId(0)]);
    }

    #[test]
    fn residents_attach_to_units() {
        let mut b = small_building();
        b.add_resident(UnitId(0), ResidentId(7));
        assert_eq!(b.unit(UnitId(0)).unwrap().residents, vec![ResidentId(7)]);
    }

    #[test]
    fn home_location_mirrors_unit_fields() {
        let b = small_building();
        let home = b.home_location(UnitId(0)).unwrap();
        assert_eq!(home, Location::unit("0501", 5, 0.22));
        assert_eq!(home.kind, LocationType::Unit);
    }

    #[test]
    fn floor_label_falls_back_to_number() {
        let b = small_building();
        assert_eq!(b.floor_label(0), "L");
        assert_eq!(b.floor_label(5), "05");
        assert_eq!(b.floor_label(99), "99");
    }
}

mod amenities {
    use super::*;

    #[test]
    fn open_window_is_half_open() {
        let a = Amenity {
            name: "Pool".to_string(),
            floor: 8,
            capacity: 10,
            category: "pool".to_string(),
            open_minute: 6 * 60,
            close_minute: 22 * 60,
            x: 0.7,
            width: 0.4,
            depth: 0.3,
            room_type: "pool".to_string(),
        };
        assert!(!a.is_open(6 * 60 - 1));
        assert!(a.is_open(6 * 60));
        assert!(a.is_open(22 * 60 - 1));
        assert!(!a.is_open(22 * 60));
    }

    #[test]
    fn category_lookup_is_sorted_by_name() {
        let b = load_building();
        let lounges = b.amenities_in_category("lounge");
        let names: Vec<&str> = lounges.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Lobby Lounge", "Retreat Lounge", "Skyline Lounge"]);
    }
}

mod stock_layout {
    use super::*;

    #[test]
    fn has_53_floors_and_max_floor_52() {
        let b = load_building();
        assert_eq!(b.floors().len(), 53);
        assert_eq!(b.max_floor(), 52);
    }

    #[test]
    fn residential_floors_carry_four_units_and_penthouse_one() {
        let b = load_building();
        for floor in 1..52 {
            assert_eq!(b.floor(floor).unwrap().units.len(), 4, "floor {floor}");
        }
        assert_eq!(b.floor(52).unwrap().units.len(), 1);
        assert!(b.floor(0).unwrap().units.is_empty());
        // 51 floors × 4 units + penthouse
        assert_eq!(b.units().len(), 51 * 4 + 1);
    }

    #[test]
    fn amenities_land_on_their_floors() {
        let b = load_building();
        assert_eq!(b.amenity("Sky Pool").unwrap().floor, 8);
        assert!(b.floor(7).unwrap().amenities.contains(&"Spa".to_string()));
        assert_eq!(b.amenities().count(), 10);
    }

    #[test]
    fn every_amenity_floor_exists() {
        let b = load_building();
        for amenity in b.amenities() {
            assert!(b.has_floor(amenity.floor), "{} floats in the void", amenity.name);
        }
    }
}
