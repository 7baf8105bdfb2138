use thiserror::Error;
use tower_core::ResidentId;
use tower_schedule::ScheduleError;

/// Errors raised while assembling a simulation.
///
/// Everything here is a construction-time failure: once [`Simulation::new`]
/// [crate::Simulation::new] returns `Ok`, stepping never fails.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("resident list index {expected} holds id {found}; ids must be dense and in order")]
    MisnumberedResident { expected: usize, found: ResidentId },

    #[error("resident {resident} ({name}) references a unit outside the building")]
    HomeUnitNotInBuilding { resident: ResidentId, name: String },

    #[error("resident {resident} ({name}) has an invalid schedule: {source}")]
    InvalidSchedule {
        resident: ResidentId,
        name: String,
        source: ScheduleError,
    },

    #[error("resident {resident} ({name}) is scheduled on floor {floor}, which the building lacks")]
    UnknownDestinationFloor {
        resident: ResidentId,
        name: String,
        floor: i32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
