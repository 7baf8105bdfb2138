//! The stock tower layout: 53 floors, four unit types per residential
//! floor, one penthouse, ten amenities.

use crate::{Amenity, Building, Floor, Unit};
use tower_core::UnitId;

/// One entry in the per-floor unit mix.
struct UnitSpec {
    suffix: &'static str,
    bedrooms: u8,
    square_feet: u32,
    rent: u32,
    position: f64,
    width: f64,
    depth: f64,
    room_type: &'static str,
}

/// The four stacked unit types repeated on floors 1–51.
const UNIT_LAYOUT: [UnitSpec; 4] = [
    UnitSpec {
        suffix: "01",
        bedrooms: 1,
        square_feet: 910,
        rent: 3_300,
        position: 0.10,
        width: 0.18,
        depth: 0.24,
        room_type: "unit_1br",
    },
    UnitSpec {
        suffix: "02",
        bedrooms: 2,
        square_feet: 1_290,
        rent: 4_950,
        position: 0.32,
        width: 0.20,
        depth: 0.26,
        room_type: "unit_2br",
    },
    UnitSpec {
        suffix: "03",
        bedrooms: 2,
        square_feet: 1_350,
        rent: 5_100,
        position: 0.56,
        width: 0.20,
        depth: 0.26,
        room_type: "unit_2br",
    },
    UnitSpec {
        suffix: "04",
        bedrooms: 3,
        square_feet: 1_680,
        rent: 6_550,
        position: 0.78,
        width: 0.22,
        depth: 0.28,
        room_type: "unit_3br",
    },
];

const TOP_FLOOR: i32 = 52;

fn standard_units(floor: i32) -> Vec<Unit> {
    UNIT_LAYOUT
        .iter()
        .map(|spec| Unit {
            id: UnitId::INVALID,
            number: format!("{floor:02}{}", spec.suffix),
            floor,
            bedrooms: spec.bedrooms,
            square_feet: spec.square_feet,
            rent: spec.rent,
            position: spec.position,
            width: spec.width,
            depth: spec.depth,
            room_type: spec.room_type.to_string(),
            residents: Vec::new(),
        })
        .collect()
}

fn penthouse() -> Unit {
    Unit {
        id: UnitId::INVALID,
        number: "52PH".to_string(),
        floor: TOP_FLOOR,
        bedrooms: 4,
        square_feet: 4_200,
        rent: 18_500,
        position: 0.55,
        width: 0.28,
        depth: 0.30,
        room_type: "penthouse".to_string(),
        residents: Vec::new(),
    }
}

fn amenity(
    name: &str,
    floor: i32,
    capacity: u32,
    category: &str,
    open_hour: u32,
    close_hour: u32,
    x: f64,
    width: f64,
    depth: f64,
    room_type: &str,
) -> Amenity {
    Amenity {
        name: name.to_string(),
        floor,
        capacity,
        category: category.to_string(),
        open_minute: open_hour * 60,
        close_minute: close_hour * 60,
        x,
        width,
        depth,
        room_type: room_type.to_string(),
    }
}

fn stock_amenities() -> Vec<Amenity> {
    vec![
        amenity("Lobby Lounge", 0, 60, "lounge", 6, 23, 0.48, 0.38, 0.30, "lounge"),
        amenity("Sky Pool", 8, 75, "pool", 6, 22, 0.70, 0.40, 0.32, "pool"),
        amenity("Fitness Center", 7, 60, "fitness", 5, 23, 0.30, 0.42, 0.32, "fitness"),
        amenity("Coworking Lounge", 9, 50, "workspace", 7, 22, 0.62, 0.38, 0.30, "workspace"),
        amenity("Basketball Court", 10, 30, "sports", 8, 22, 0.40, 0.50, 0.34, "fitness"),
        amenity("Spa", 7, 12, "spa", 10, 21, 0.75, 0.28, 0.28, "spa"),
        amenity("Children's Playroom", 8, 20, "family", 8, 20, 0.25, 0.32, 0.30, "family"),
        amenity("Retreat Lounge", 20, 45, "lounge", 9, 24, 0.60, 0.36, 0.30, "lounge"),
        amenity("Skyline Lounge", 52, 35, "lounge", 10, 24, 0.32, 0.40, 0.30, "lounge"),
        amenity("Cafe Optima", 0, 25, "dining", 6, 20, 0.62, 0.34, 0.28, "dining"),
    ]
}

/// Build the stock 53-floor tower.
///
/// Floor 0 is the lobby ("L"), floors 1–51 carry the standard unit mix,
/// floor 52 is the penthouse level.
pub fn load_building() -> Building {
    let floors: Vec<Floor> = (0..=TOP_FLOOR)
        .map(|number| {
            let label = if number == 0 { "L".to_string() } else { format!("{number:02}") };
            Floor::new(number, label)
        })
        .collect();

    let mut building = Building::new(
        "Optima Signature",
        "220 E Illinois St, Chicago, IL 60611",
        floors,
    );

    for floor in 1..TOP_FLOOR {
        for unit in standard_units(floor) {
            building.add_unit(unit);
        }
    }
    building.add_unit(penthouse());

    for amenity in stock_amenities() {
        building.add_amenity(amenity);
    }

    building
}
