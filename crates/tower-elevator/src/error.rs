use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("floor {floor} outside served range [{min}, {max}]")]
    FloorOutOfRange { floor: i32, min: i32, max: i32 },
}

pub type ElevatorResult<T> = Result<T, ElevatorError>;
