//! Per-resident mutable simulation state.

use tower_building::{Location, LocationType};
use tower_elevator::ElevatorRequest;
use tower_schedule::Activity;

/// Where a resident is in their movement lifecycle.
///
/// `InEvent` is the rest state: the resident is at their scheduled
/// location.  A schedule change on another floor moves them through
/// `WaitingElevator` and `InElevator`; a change on the same floor (and the
/// last stretch from the elevator lobby) is `Walking`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidentStatus {
    InEvent,
    WaitingElevator,
    InElevator,
    Walking,
}

impl ResidentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResidentStatus::InEvent => "in_event",
            ResidentStatus::WaitingElevator => "waiting_elevator",
            ResidentStatus::InElevator => "in_elevator",
            ResidentStatus::Walking => "walking",
        }
    }
}

/// Mutable per-resident state, parallel to the simulation's resident list.
///
/// The immutable [`Resident`][tower_population::Resident] record never
/// changes during a run except for mood; everything that does change per
/// tick lives here, including the schedule cursor (`event_index`).
#[derive(Clone, Debug)]
pub struct ResidentRuntime {
    /// Integer floor the resident is on (car floor while riding).
    pub floor: i32,
    /// Continuous vertical position in floors, for smooth elevator rides.
    pub vertical_position: f64,
    /// Horizontal position across the floor plate, `0.0..=1.0`.
    pub x: f64,
    pub target_x: f64,
    pub status: ResidentStatus,
    pub location_label: String,
    pub location_kind: LocationType,
    /// Where the current schedule event wants the resident to be.
    pub destination: Option<Location>,
    /// Event label held back until arrival, then logged.
    pub pending_event_label: Option<String>,
    pub pending_activity: Activity,
    pub elevator_request: Option<ElevatorRequest>,
    /// Schedule cursor, fed back as the hint for the next lookup.
    pub event_index: usize,
    pub ticks_in_status: u32,
    /// Floor the current elevator trip is bound for.
    pub travel_destination_floor: Option<i32>,
}

impl ResidentRuntime {
    /// A resident at rest at `home` before the first tick.
    pub fn at_rest(home: &Location, event_index: usize, activity: Activity) -> Self {
        let floor = home.floor.unwrap_or(0);
        let x = home.x.unwrap_or(0.5);
        ResidentRuntime {
            floor,
            vertical_position: floor as f64,
            x,
            target_x: x,
            status: ResidentStatus::InEvent,
            location_label: home.label.clone(),
            location_kind: home.kind,
            destination: Some(home.clone()),
            pending_event_label: None,
            pending_activity: activity,
            elevator_request: None,
            event_index,
            ticks_in_status: 0,
            travel_destination_floor: None,
        }
    }

    pub fn set_status(&mut self, status: ResidentStatus) {
        self.status = status;
        self.ticks_in_status = 0;
    }
}
