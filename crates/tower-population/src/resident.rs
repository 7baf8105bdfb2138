//! The `Resident` record.

use tower_core::{ResidentId, UnitId};
use tower_schedule::DaySchedule;

use crate::Persona;

/// A simulated resident living in the building.
///
/// Created once at population time and never destroyed during a run.  The
/// schedule is immutable; `mood` is the only field the simulation mutates
/// (the schedule *cursor* lives on the simulation's runtime record, not
/// here).  `home_unit` is a non-owning id back-reference into the
/// building's unit arena.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resident {
    pub id: ResidentId,
    pub name: String,
    pub age: u8,
    pub occupation: String,
    pub persona: Persona,
    pub home_unit: UnitId,
    pub schedule: DaySchedule,
    /// Satisfaction in `[0, 1]`, nudged every tick by the current activity.
    pub mood: f64,
    pub hair_color: String,
    pub outfit_color: String,
    pub accent_color: String,
}
