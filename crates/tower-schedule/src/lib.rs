//! `tower-schedule` — daily activity schedules for residents.
//!
//! # Model
//!
//! A resident's day is a [`DaySchedule`]: an ordered list of
//! [`ScheduleEvent`]s over half-open minute intervals that together cover
//! `[0, 1440)` with no gaps or overlaps.  Construction normalizes the list
//! (sort + [`merge_events`]); [`DaySchedule::validate_coverage`] checks the
//! full-day invariant and is enforced by the simulation constructor.
//!
//! The schedule itself is immutable.  The **cursor** — which event is
//! active right now — belongs to the simulation's per-resident runtime;
//! [`DaySchedule::event_index_at`] resynchronizes it each tick with an O(1)
//! fast path when the minute is still inside the hinted event.

pub mod activity;
pub mod error;
pub mod event;


pub use activity::Activity;
pub use error::{ScheduleError, ScheduleResult};
pub use event::{DaySchedule, ScheduleEvent, merge_events};
