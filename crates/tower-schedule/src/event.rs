//! Schedule events, merge normalization, and the `DaySchedule` container.

use tower_building::Location;
use tower_core::MINUTES_PER_DAY;

use crate::{Activity, ScheduleError, ScheduleResult};

// ── ScheduleEvent ────────────────────────────────────────────────────────────

/// One timed entry in a resident's day, over the half-open minute interval
/// `[start_minute, end_minute)`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEvent {
    pub start_minute: u32,
    pub end_minute: u32,
    pub activity: Activity,
    pub location: Location,
    /// Human-readable description, logged when the resident arrives.
    pub label: String,
}

impl ScheduleEvent {
    pub fn new(
        start_minute: u32,
        end_minute: u32,
        activity: Activity,
        location: Location,
        label: impl Into<String>,
    ) -> Self {
        ScheduleEvent { start_minute, end_minute, activity, location, label: label.into() }
    }

    /// `true` if `minute` falls inside this event's interval.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        self.start_minute <= minute && minute < self.end_minute
    }

    pub fn duration(&self) -> u32 {
        self.end_minute - self.start_minute
    }
}

// ── Merge normalization ──────────────────────────────────────────────────────

/// Collapse consecutive events with identical activity and location and
/// contiguous minutes into one.
///
/// A normalization pass applied once at construction; it reduces event
/// count without changing semantics.  The merged event keeps the first
/// event's label.
pub fn merge_events(mut events: Vec<ScheduleEvent>) -> Vec<ScheduleEvent> {
    events.sort_by_key(|e| e.start_minute);
    let mut merged: Vec<ScheduleEvent> = Vec::with_capacity(events.len());
    for event in events {
        match merged.last_mut() {
            Some(prev)
                if prev.activity == event.activity
                    && prev.location == event.location
                    && prev.end_minute == event.start_minute =>
            {
                prev.end_minute = event.end_minute;
            }
            _ => merged.push(event),
        }
    }
    merged
}

// ── DaySchedule ──────────────────────────────────────────────────────────────

/// A resident's full day of events, sorted and merge-normalized.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySchedule {
    events: Vec<ScheduleEvent>,
}

impl DaySchedule {
    /// Construct from raw events: sorts by start minute and merges adjacent
    /// duplicates.  Coverage is *not* checked here — call
    /// [`validate_coverage`][Self::validate_coverage] (the simulation
    /// constructor does).
    pub fn new(events: Vec<ScheduleEvent>) -> Self {
        DaySchedule { events: merge_events(events) }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Read-only slice of all events, sorted by start minute.
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    /// Check that the events cover exactly `[0, 1440)` with no gaps or
    /// overlaps.
    pub fn validate_coverage(&self) -> ScheduleResult<()> {
        let Some(first) = self.events.first() else {
            return Err(ScheduleError::Empty);
        };
        if first.start_minute != 0 {
            return Err(ScheduleError::DoesNotStartAtMidnight(first.start_minute));
        }
        let mut expected = 0;
        for event in &self.events {
            if event.end_minute <= event.start_minute {
                return Err(ScheduleError::EmptyInterval {
                    start: event.start_minute,
                    end: event.end_minute,
                });
            }
            if event.start_minute != expected {
                return Err(ScheduleError::Discontinuity {
                    expected,
                    found: event.start_minute,
                });
            }
            expected = event.end_minute;
        }
        if expected != MINUTES_PER_DAY {
            return Err(ScheduleError::IncompleteDay(expected));
        }
        Ok(())
    }

    /// Index of the event whose interval contains `minute`.
    ///
    /// `hint` is the caller's previous cursor; when the minute is still
    /// inside that event the lookup is O(1).  Otherwise the (short) list is
    /// scanned linearly.  If no event contains the minute — possible only
    /// for a malformed schedule — the last index is returned: a
    /// degraded-but-safe state, never a panic.
    pub fn event_index_at(&self, minute: u32, hint: usize) -> usize {
        if self.events.is_empty() {
            return 0;
        }
        if let Some(event) = self.events.get(hint)
            && event.contains(minute)
        {
            return hint;
        }
        for (idx, event) in self.events.iter().enumerate() {
            if event.contains(minute) {
                return idx;
            }
        }
        self.events.len() - 1
    }
}
