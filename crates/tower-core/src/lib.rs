//! `tower-core` — foundational types for the `towerlife` building simulator.
//!
//! This crate is a dependency of every other `tower-*` crate.  It
//! intentionally has no `tower-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`ids`]   | `ResidentId`, `UnitId`                                |
//! | [`time`]  | `Tick`, `WallClock`, minute-of-day helpers            |
//! | [`rng`]   | `SimRng` (deterministic seeded RNG)                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ResidentId, UnitId};
pub use rng::SimRng;
pub use time::{MINUTES_PER_DAY, Tick, WallClock, add_minutes, minutes_to_clock};
