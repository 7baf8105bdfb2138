//! Simulation time model.
//!
//! # Design
//!
//! Two notions of time coexist:
//!
//! - [`Tick`] — a monotonically increasing counter, one increment per
//!   simulation step.  All engine-internal bookkeeping (request ages, the
//!   snapshot counter) uses ticks.
//! - [`WallClock`] — the simulated wall time, stored as Unix seconds and
//!   advanced by a whole number of minutes per tick.  Schedules are phrased
//!   in **minute-of-day** (0..1440), so the clock exposes that directly.
//!
//! Wall time is converted to calendar dates with the standard civil-date
//! arithmetic (Howard Hinnant's `days_from_civil` / `civil_from_days`),
//! which keeps this crate free of a datetime dependency.

use std::fmt;

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

const SECS_PER_DAY: i64 = 86_400;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Minute-of-day helpers ────────────────────────────────────────────────────

/// Minute-of-day after adding `delta`, wrapping around the day boundary.
#[inline]
pub fn add_minutes(minute: u32, delta: u32) -> u32 {
    (minute + delta) % MINUTES_PER_DAY
}

/// Format a minute-of-day as a 12-hour clock string, e.g. `"07:05 AM"`.
pub fn minutes_to_clock(minute: u32) -> String {
    let minute = minute % MINUTES_PER_DAY;
    let hour = minute / 60;
    let mins = minute % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour:02}:{mins:02} {suffix}")
}

// ── WallClock ────────────────────────────────────────────────────────────────

/// Simulated wall-clock time, advanced in whole minutes.
///
/// Cheap to copy; holds a single Unix timestamp.  The default clock starts
/// at 2024-01-01 06:00, matching a quiet early-morning building.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallClock {
    /// Seconds since the Unix epoch (civil time, no zone).
    pub unix_secs: i64,
}

impl Default for WallClock {
    fn default() -> Self {
        WallClock::from_civil(2024, 1, 1, 6, 0)
    }
}

impl WallClock {
    /// Construct from a civil date and time.
    pub fn from_civil(year: i64, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let days = days_from_civil(year, month, day);
        WallClock {
            unix_secs: days * SECS_PER_DAY + (hour as i64) * 3_600 + (minute as i64) * 60,
        }
    }

    /// Advance the clock by `minutes` simulated minutes.
    #[inline]
    pub fn advance_minutes(&mut self, minutes: u32) {
        self.unix_secs += minutes as i64 * 60;
    }

    /// Minute within the current day, `0..1440`.
    #[inline]
    pub fn minute_of_day(&self) -> u32 {
        (self.unix_secs.rem_euclid(SECS_PER_DAY) / 60) as u32
    }

    /// ISO-8601 timestamp, e.g. `"2024-01-01T06:00:00"`.
    pub fn iso8601(&self) -> String {
        let days = self.unix_secs.div_euclid(SECS_PER_DAY);
        let secs = self.unix_secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        let (hour, minute, second) = (secs / 3_600, (secs % 3_600) / 60, secs % 60);
        format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}")
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso8601())
    }
}

// ── Civil-date arithmetic ────────────────────────────────────────────────────

/// Days since 1970-01-01 for a civil `(year, month, day)`.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as i64;
    let mp = if month > 2 { month - 3 } else { month + 9 } as i64;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil `(year, month, day)` for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = if month <= 2 { y + 1 } else { y };
    (year, month, day)
}
