//! `tower-sim` — the tick-based simulation engine.
//!
//! One [`Simulation`] owns a static [`Building`][tower_building::Building],
//! the residents, their per-tick runtime records, a single elevator car,
//! and a bounded event feed.  Each [`Simulation::step`] advances simulated
//! time by a fixed number of minutes and moves every resident through
//! their day: schedule changes trigger walks or elevator trips, moods
//! drift with the current activity, and a human-readable feed entry is
//! recorded for every notable transition.
//!
//! [`Simulation::state_snapshot`] aggregates the whole world into an
//! owned, `serde`-serializable [`StateSnapshot`] for frontends and logs.
//!
//! Everything is deterministic: same building, same residents, same tick
//! count — byte-identical snapshots.

pub mod error;
pub mod events;
pub mod runtime;
pub mod sim;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use events::{EVENT_LOG_CAPACITY, EventLog, SimulationEvent};
pub use runtime::{ResidentRuntime, ResidentStatus};
pub use sim::{ELEVATOR_WAIT_X, ELEVATOR_X, SimConfig, Simulation, WALK_SPEED};
pub use snapshot::{
    ElevatorSnapshot, FloorOutline, ResidentSnapshot, StateSnapshot, SunlightState, UnitOutline,
    sunlight_at,
};
