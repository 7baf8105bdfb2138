//! `tower-building` — the static building model for the `towerlife` simulator.
//!
//! A [`Building`] is immutable once constructed and populated: an ordered
//! list of [`Floor`]s, a `UnitId`-indexed arena of [`Unit`]s, and a
//! name-keyed registry of [`Amenity`]s.  Floors reference their units by
//! [`UnitId`][tower_core::UnitId] and units reference their occupants by
//! `ResidentId` — identifier back-references instead of mutual ownership,
//! so there are no reference cycles anywhere in the model.
//!
//! [`layout::load_building`] produces the stock 53-floor tower the rest of
//! the workspace simulates.

pub mod building;
pub mod layout;
pub mod location;

#[cfg(test)]
mod tests;

pub use building::{Amenity, Building, Floor, Unit};
pub use layout::load_building;
pub use location::{Location, LocationType};
