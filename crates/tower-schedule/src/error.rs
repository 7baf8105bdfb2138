use thiserror::Error;

/// Violations of the full-day schedule invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule has no events")]
    Empty,

    #[error("first event starts at minute {0}, expected 0")]
    DoesNotStartAtMidnight(u32),

    #[error("event boundary mismatch: expected start at minute {expected}, found {found}")]
    Discontinuity { expected: u32, found: u32 },

    #[error("last event ends at minute {0}, expected 1440")]
    IncompleteDay(u32),

    #[error("event from minute {start} to {end} is empty or inverted")]
    EmptyInterval { start: u32, end: u32 },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
