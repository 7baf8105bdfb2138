//! Trip intents, riders, and the per-tick outcome record.

use tower_core::{ResidentId, Tick};

/// A pending trip intent, queued FIFO on its origin floor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ElevatorRequest {
    pub resident: ResidentId,
    pub origin: i32,
    pub destination: i32,
    /// `+1` going up, `-1` going down.
    pub direction: i8,
    pub created_tick: Tick,
}

impl ElevatorRequest {
    pub fn new(resident: ResidentId, origin: i32, destination: i32, created_tick: Tick) -> Self {
        ElevatorRequest {
            resident,
            origin,
            destination,
            direction: if destination > origin { 1 } else { -1 },
            created_tick,
        }
    }
}

/// A rider currently inside the car.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ElevatorPassenger {
    pub resident: ResidentId,
    pub destination: i32,
}

/// What one [`ElevatorSystem::step`][crate::ElevatorSystem::step] did.
///
/// The simulation applies `boarded`/`disembarked` to its resident runtimes
/// before running per-runtime interpolation, so a resident who boards this
/// tick is rendered at the car's position immediately.
#[derive(Clone, Debug, Default)]
pub struct StepOutcome {
    pub boarded: Vec<ResidentId>,
    pub disembarked: Vec<(ResidentId, i32)>,
    /// Continuous car position after the step, in floors.
    pub position: f64,
    pub doors_open: bool,
    /// Nearest integer floor to `position`.
    pub floor: i32,
}
