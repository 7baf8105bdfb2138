//! Floors, units, amenities, and the `Building` that owns them.

use rustc_hash::FxHashMap;
use tower_core::{ResidentId, UnitId};

use crate::Location;

// ── Amenity ──────────────────────────────────────────────────────────────────

/// A shared facility residents can visit.
///
/// `capacity` is display metadata — occupancy is reported in snapshots but
/// not enforced as a hard cap.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amenity {
    /// Unique name, used as the registry key.
    pub name: String,
    pub floor: i32,
    pub capacity: u32,
    /// Category tag used by schedule generators ("fitness", "lounge", …).
    pub category: String,
    /// Opening window, half-open over minute-of-day.
    pub open_minute: u32,
    pub close_minute: u32,
    /// Horizontal position in `[0, 1]` for visual placement.
    pub x: f64,
    /// Display geometry for the rendering client.
    pub width: f64,
    pub depth: f64,
    pub room_type: String,
}

impl Amenity {
    /// `true` if the amenity is open at `minute_of_day`.
    pub fn is_open(&self, minute_of_day: u32) -> bool {
        self.open_minute <= minute_of_day && minute_of_day < self.close_minute
    }

    /// The `Location` a schedule event uses to send a resident here.
    pub fn location(&self) -> Location {
        Location::amenity(self.name.clone(), self.floor, self.x)
    }
}

// ── Unit ─────────────────────────────────────────────────────────────────────

/// A residential unit.  Residents are added at population time and never
/// removed for the lifetime of the simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    /// Printable unit number, e.g. `"0501"` or `"52PH"`.
    pub number: String,
    pub floor: i32,
    pub bedrooms: u8,
    pub square_feet: u32,
    pub rent: u32,
    /// Horizontal position in `[0, 1]` for visual placement.
    pub position: f64,
    /// Display geometry for the rendering client.
    pub width: f64,
    pub depth: f64,
    pub room_type: String,
    /// Occupants, by id.
    pub residents: Vec<ResidentId>,
}

impl Unit {
    /// The `Location` a schedule event uses to send a resident home.
    pub fn location(&self) -> Location {
        Location::unit(self.number.clone(), self.floor, self.position)
    }
}

// ── Floor ────────────────────────────────────────────────────────────────────

/// One storey of the building.  Units and amenities are referenced by id
/// and name; the `Building` arena owns them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    pub number: i32,
    /// Display label, e.g. `"L"` for the lobby or `"05"`.
    pub label: String,
    pub units: Vec<UnitId>,
    pub amenities: Vec<String>,
}

impl Floor {
    pub fn new(number: i32, label: impl Into<String>) -> Self {
        Floor { number, label: label.into(), units: Vec::new(), amenities: Vec::new() }
    }
}

// ── Building ─────────────────────────────────────────────────────────────────

/// The whole building: floors in ascending order, a unit arena, and a
/// name-keyed amenity registry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub name: String,
    pub address: String,
    floors: Vec<Floor>,
    units: Vec<Unit>,
    amenities: FxHashMap<String, Amenity>,
}

impl Building {
    /// Construct from a list of floors.  Floors are sorted by number.
    pub fn new(name: impl Into<String>, address: impl Into<String>, mut floors: Vec<Floor>) -> Self {
        floors.sort_unstable_by_key(|f| f.number);
        Building {
            name: name.into(),
            address: address.into(),
            floors,
            units: Vec::new(),
            amenities: FxHashMap::default(),
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add a unit to the arena and register it on its floor.
    ///
    /// The passed unit's `id` field is overwritten with the arena index.
    pub fn add_unit(&mut self, mut unit: Unit) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        unit.id = id;
        debug_assert!(
            self.floors.iter().any(|f| f.number == unit.floor),
            "unit {} references missing floor {}",
            unit.number,
            unit.floor
        );
        if let Some(floor) = self.floors.iter_mut().find(|f| f.number == unit.floor) {
            floor.units.push(id);
        }
        self.units.push(unit);
        id
    }

    /// Register an amenity under its unique name and on its floor.
    pub fn add_amenity(&mut self, amenity: Amenity) {
        if let Some(floor) = self.floors.iter_mut().find(|f| f.number == amenity.floor) {
            floor.amenities.push(amenity.name.clone());
        }
        self.amenities.insert(amenity.name.clone(), amenity);
    }

    /// Record `resident` as living in `unit`.
    pub fn add_resident(&mut self, unit: UnitId, resident: ResidentId) {
        debug_assert!(unit.index() < self.units.len(), "unknown unit {unit}");
        if let Some(u) = self.units.get_mut(unit.index()) {
            u.residents.push(resident);
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, number: i32) -> Option<&Floor> {
        self.floors.iter().find(|f| f.number == number)
    }

    pub fn has_floor(&self, number: i32) -> bool {
        self.floor(number).is_some()
    }

    /// Display label for a floor, falling back to the bare number when the
    /// floor is unknown.
    pub fn floor_label(&self, number: i32) -> String {
        match self.floor(number) {
            Some(floor) => floor.label.clone(),
            None => number.to_string(),
        }
    }

    /// Highest floor number, or 0 for an empty building.
    pub fn max_floor(&self) -> i32 {
        self.floors.last().map_or(0, |f| f.number)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.index())
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn amenity(&self, name: &str) -> Option<&Amenity> {
        self.amenities.get(name)
    }

    pub fn amenities(&self) -> impl Iterator<Item = &Amenity> {
        self.amenities.values()
    }

    /// All amenities in `category`.
    pub fn amenities_in_category(&self, category: &str) -> Vec<&Amenity> {
        let mut found: Vec<&Amenity> =
            self.amenities.values().filter(|a| a.category == category).collect();
        // FxHashMap iteration order is arbitrary; sort for determinism.
        found.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        found
    }

    /// The home `Location` for a unit, if the id is valid.
    pub fn home_location(&self, unit: UnitId) -> Option<Location> {
        self.unit(unit).map(Unit::location)
    }

    /// `true` if a location's floor exists in this building (locations
    /// without a floor are trivially valid).
    pub fn contains_location(&self, location: &Location) -> bool {
        match location.floor {
            Some(floor) => self.has_floor(floor),
            None => true,
        }
    }
}
