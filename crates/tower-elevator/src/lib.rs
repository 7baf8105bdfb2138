//! `tower-elevator` — the building's single shared elevator car.
//!
//! # State machine
//!
//! ```text
//! Idle ──(target chosen)──▶ Moving ──(reach target)──▶ DoorOpen
//!  ▲  ◀──(1-tick dwell elapsed; re-choose target)────────┘
//!  └──(service at current floor)──▶ DoorOpen  (instantaneous arrival)
//! ```
//!
//! # Dispatch policy
//!
//! Nearest-target, drop-offs first: while the car carries passengers the
//! next target is the nearest passenger destination (by absolute floor
//! distance from the continuous position); only an empty car picks up, and
//! then from the nearest floor with a non-empty waiting queue.  Equidistant
//! candidates resolve to the **lower floor number** — a deliberate,
//! documented tie-break.  This is pragmatic nearest-neighbor dispatch, not
//! elevator-bank optimal scheduling: direction reversals can happen, but
//! every request is eventually served.
//!
//! Callers treat the car as an opaque capability: [`ElevatorSystem::request`],
//! [`ElevatorSystem::cancel`], and [`ElevatorSystem::step`] are the whole
//! surface; the queues are never reached into directly.

pub mod error;
pub mod request;
pub mod system;


pub use error::{ElevatorError, ElevatorResult};
pub use request::{ElevatorPassenger, ElevatorRequest, StepOutcome};
pub use system::{ElevatorState, ElevatorSystem};
