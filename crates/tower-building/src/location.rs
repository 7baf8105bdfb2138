//! Where an activity happens: the `Location` value type.

/// Kinds of places a resident can occupy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocationType {
    Unit,
    Amenity,
    Outside,
    Service,
}

impl LocationType {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Unit => "unit",
            LocationType::Amenity => "amenity",
            LocationType::Outside => "outside",
            LocationType::Service => "service",
        }
    }
}

/// Physical or logical place where a resident can be.
///
/// Immutable, compared by value.  `floor` and `x` are optional: an event
/// with no floor keeps the resident on whatever floor they already occupy,
/// and an event with no `x` keeps their current horizontal position.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub kind: LocationType,
    pub label: String,
    pub floor: Option<i32>,
    pub x: Option<f64>,
}

impl Location {
    pub fn new(
        kind: LocationType,
        label: impl Into<String>,
        floor: Option<i32>,
        x: Option<f64>,
    ) -> Self {
        Location { kind, label: label.into(), floor, x }
    }

    /// A home unit.
    pub fn unit(label: impl Into<String>, floor: i32, x: f64) -> Self {
        Location::new(LocationType::Unit, label, Some(floor), Some(x))
    }

    /// A named amenity inside the building.
    pub fn amenity(label: impl Into<String>, floor: i32, x: f64) -> Self {
        Location::new(LocationType::Amenity, label, Some(floor), Some(x))
    }

    /// Somewhere outside the building; residents reach it via the lobby.
    pub fn outside(label: impl Into<String>, x: f64) -> Self {
        Location::new(LocationType::Outside, label, Some(0), Some(x))
    }
}
