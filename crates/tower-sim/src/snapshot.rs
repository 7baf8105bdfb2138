//! Read-only aggregate of the whole simulation at one instant.
//!
//! Snapshots are plain data, fully owned and `serde`-serializable, so a
//! frontend or log sink can consume them without touching live simulation
//! state.  All visual fields are pre-rounded (positions to 3 decimals,
//! mood to 2) so serialized output is stable across runs.

use std::collections::BTreeMap;

use tower_building::{Building, LocationType};
use tower_core::ResidentId;
use tower_population::Persona;
use tower_schedule::Activity;

use crate::events::SimulationEvent;
use crate::runtime::ResidentStatus;

/// First minute of daylight.
pub const SUNRISE: u32 = 6 * 60;
/// Last minute of daylight.
pub const SUNSET: u32 = 19 * 60;

/// One resident's visual state inside a [`StateSnapshot`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct ResidentSnapshot {
    pub resident_id: ResidentId,
    pub name: String,
    pub persona: Persona,
    /// Scheduled activity, or `Commute` while in transit.
    pub activity: Activity,
    pub location: String,
    pub location_type: LocationType,
    pub floor: i32,
    pub floor_label: String,
    pub mood: f64,
    pub x: f64,
    pub target_x: f64,
    pub status: ResidentStatus,
    pub vertical_position: f64,
    pub hair_color: String,
    pub outfit_color: String,
    pub accent_color: String,
}

/// Daylight model output for ambience rendering.
#[derive(Copy, Clone, Debug, serde::Serialize)]
pub struct SunlightState {
    pub is_day: bool,
    /// `sin` of the sun's arc angle; negative below the horizon.
    pub sun_altitude: f64,
    pub brightness: f64,
}

/// Elevator car summary inside a [`StateSnapshot`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct ElevatorSnapshot {
    pub position: f64,
    pub floor: i32,
    pub doors_open: bool,
    pub passengers: usize,
    pub waiting: BTreeMap<i32, usize>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct UnitOutline {
    pub unit: String,
    pub position: f64,
    pub bedrooms: u8,
    pub width: f64,
    pub depth: f64,
    pub room_type: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct FloorOutline {
    pub floor: i32,
    pub label: String,
    pub units: Vec<UnitOutline>,
    pub amenities: Vec<String>,
}

/// Complete simulation state at one tick.
#[derive(Clone, Debug, serde::Serialize)]
pub struct StateSnapshot {
    /// ISO-8601 simulated wall time.
    pub timestamp: String,
    pub minute_of_day: u32,
    /// 12-hour display clock, e.g. `"07:05 AM"`.
    pub clock: String,
    /// Residents per activity name.
    pub activity_breakdown: BTreeMap<&'static str, usize>,
    /// Residents currently inside each amenity.
    pub amenity_load: BTreeMap<String, usize>,
    pub residents: Vec<ResidentSnapshot>,
    /// Recent feed entries, oldest first.
    pub events: Vec<SimulationEvent>,
    pub tick: u64,
    pub sunlight: SunlightState,
    pub elevator: ElevatorSnapshot,
    /// Static geometry, identical in every snapshot of a run.
    pub building: Vec<FloorOutline>,
}

/// Sinusoidal daylight over the sunrise-to-sunset arc; a dimmer mirrored
/// arc covers the night so brightness stays continuous.
pub fn sunlight_at(minute_of_day: u32) -> SunlightState {
    let minute = minute_of_day as f64;
    if (SUNRISE..=SUNSET).contains(&minute_of_day) {
        let progress = (minute - SUNRISE as f64) / (SUNSET - SUNRISE) as f64;
        let angle = progress * std::f64::consts::PI;
        return SunlightState {
            is_day: true,
            sun_altitude: round3(angle.sin()),
            brightness: round3(0.25 + 0.75 * angle.sin()),
        };
    }
    let span = (SUNRISE + (1440 - SUNSET)) as f64;
    let progress = if minute_of_day < SUNRISE {
        (minute + (1440 - SUNSET) as f64) / span
    } else {
        (minute - SUNSET as f64) / span
    };
    let angle = progress * std::f64::consts::PI;
    SunlightState {
        is_day: false,
        sun_altitude: round3(-angle.sin()),
        brightness: round3(0.05 + 0.25 * angle.sin()),
    }
}

/// Static per-floor geometry for the rendering client.
pub fn build_outline(building: &Building) -> Vec<FloorOutline> {
    building
        .floors()
        .iter()
        .map(|floor| FloorOutline {
            floor: floor.number,
            label: floor.label.clone(),
            units: floor
                .units
                .iter()
                .filter_map(|id| building.unit(*id))
                .map(|unit| UnitOutline {
                    unit: unit.number.clone(),
                    position: unit.position,
                    bedrooms: unit.bedrooms,
                    width: unit.width,
                    depth: unit.depth,
                    room_type: unit.room_type.clone(),
                })
                .collect(),
            amenities: floor.amenities.clone(),
        })
        .collect()
}

#[inline]
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}

#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
