//! Free time of a schedule window once its reservations are taken out.
//!
//! Everything here is pure and synchronous. Callers fetch the schedule
//! and its reservations, then resolve availability on every request;
//! nothing is cached.

mod booking;

pub use booking::*;

use chrono::{NaiveDateTime, TimeDelta};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Minimum bookable duration used when a schedule does not set one.
pub const DEFAULT_MINIMUM_HOURS: u32 = 1;

/// Half-open `[start, end)` span of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A booking that consumes part of a schedule window.
pub type ReservationInterval = TimeRange;

/// A gap in a schedule window long enough to be booked.
pub type FreeInterval = TimeRange;

/// The span a host offers a spot for and the shortest booking they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub minimum_hours: u32,
}

impl ScheduleWindow {
    /// A missing or zero minimum falls back to `DEFAULT_MINIMUM_HOURS`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, minimum_hours: Option<u32>) -> Self {
        Self {
            start,
            end,
            minimum_hours: minimum_hours
                .filter(|hours| *hours > 0)
                .unwrap_or(DEFAULT_MINIMUM_HOURS),
        }
    }

    pub fn minimum_duration(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.minimum_hours))
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    fn admits(&self, gap: &TimeRange) -> bool {
        gap.duration() >= self.minimum_duration()
    }
}

/// Computes the gaps of `window` not covered by `reservations`,
/// ascending by start, dropping any gap shorter than the window's
/// minimum hours.
///
/// Reservations may arrive in any order. They are expected not to
/// overlap; when they do, the covered time is merged and a warning is
/// logged. Gaps never extend past the end of the window.
pub fn compute_free_intervals(
    window: &ScheduleWindow,
    reservations: &[ReservationInterval],
) -> Vec<FreeInterval> {
    let mut free = Vec::new();
    let mut last_end = window.start;
    let mut covered_until: Option<NaiveDateTime> = None;

    for reservation in reservations.iter().sorted_by_key(|r| r.start) {
        if let Some(until) = covered_until
            && reservation.start < until
        {
            tracing::warn!(
                "Overlapping reservations: {} starts before {}",
                reservation.start,
                until
            );
        }

        if last_end < reservation.start && last_end < window.end {
            let gap = TimeRange::new(last_end, reservation.start.min(window.end));
            if window.admits(&gap) {
                free.push(gap);
            }
        }

        last_end = last_end.max(reservation.end);
        covered_until = Some(covered_until.map_or(reservation.end, |u| u.max(reservation.end)));
    }

    if last_end < window.end {
        let gap = TimeRange::new(last_end, window.end);
        if window.admits(&gap) {
            free.push(gap);
        }
    }

    free
}

/// True when `requested` fits entirely inside a single free interval.
/// A range that spans a reservation is rejected even if the time on
/// either side would add up.
pub fn is_range_bookable(
    window: &ScheduleWindow,
    reservations: &[ReservationInterval],
    requested: &RequestedRange,
) -> bool {
    let requested = requested.range();
    compute_free_intervals(window, reservations)
        .iter()
        .any(|free| free.contains(&requested))
}

/// Reservations sorted by start, as shown in the unavailable time panel.
pub fn unavailable_intervals(reservations: &[ReservationInterval]) -> Vec<ReservationInterval> {
    reservations
        .iter()
        .copied()
        .sorted_by_key(|r| r.start)
        .collect()
}
