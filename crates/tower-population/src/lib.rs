//! `tower-population` — who lives in the building.
//!
//! A [`ResidentFactory`] fills every unit with one [`Resident`]: a random
//! [`Persona`] picks the occupation pool, age range, appearance palette,
//! and — most importantly — the shape of the resident's daily schedule.
//! All randomness flows through a single seeded
//! [`SimRng`][tower_core::SimRng], so a given seed always produces the
//! same population.
//!
//! Personas are a closed enum with one schedule-construction function per
//! variant, not an open registry: adding a persona means adding a variant
//! and its builder.

pub mod factory;
pub mod names;
pub mod persona;
pub mod resident;

#[cfg(test)]
mod tests;

pub use factory::ResidentFactory;
pub use persona::{Palette, Persona};
pub use resident::Resident;
