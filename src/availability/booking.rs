//! Shaping a picked booking range and checking it before submission.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ReservationInterval, ScheduleWindow, TimeRange, is_range_bookable};
use crate::models::PaymentMethod;

/// Picked times are rounded to this many minutes.
pub const SNAP_MINUTES: u32 = 5;

/// Datetime layout the marketplace API expects for booking ranges.
pub const BOOKING_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

const RANGE_SEPARATOR: &str = " - ";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Duration should not be empty")]
    EmptyDuration,
    #[error("Duration should be in Available Time")]
    Unavailable,
    #[error("Vehicle should not be empty")]
    MissingVehicle,
    #[error("Payment method should not be empty")]
    MissingPaymentMethod,
    #[error("Invalid booking datetime: {0}")]
    InvalidDatetime(String),
}

/// Rounds to the nearest `SNAP_MINUTES` boundary and drops seconds.
/// Rounding up from :58 lands on the next hour.
pub fn snap_to_boundary(dt: NaiveDateTime) -> NaiveDateTime {
    let minute = dt.minute();
    let snapped = (minute + SNAP_MINUTES / 2) / SNAP_MINUTES * SNAP_MINUTES;
    let top_of_hour = dt
        - TimeDelta::minutes(i64::from(minute))
        - TimeDelta::seconds(i64::from(dt.second()))
        - TimeDelta::nanoseconds(i64::from(dt.nanosecond()));
    top_of_hour + TimeDelta::minutes(i64::from(snapped))
}

/// A renter's candidate booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RequestedRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, BookingError> {
        if end <= start {
            return Err(BookingError::EmptyDuration);
        }
        Ok(Self { start, end })
    }

    /// Shapes a range as picked in a date range picker: both bounds are
    /// snapped, then the end is moved so the range covers a whole
    /// number of hours and at least `minimum_hours`.
    pub fn from_picker(start: NaiveDateTime, end: NaiveDateTime, minimum_hours: u32) -> Self {
        let start = snap_to_boundary(start);
        let end = snap_to_boundary(end);

        let picked_ms = (end - start).num_milliseconds() as f64;
        let picked_hours = (picked_ms / 3_600_000.0).ceil() as i64;
        let hours = picked_hours.max(i64::from(minimum_hours));

        Self {
            start,
            end: start + TimeDelta::hours(hours),
        }
    }

    /// Parses `dd/MM/yyyy HH:mm - dd/MM/yyyy HH:mm`.
    pub fn parse_booking_datetime(value: &str) -> Result<Self, BookingError> {
        let invalid = || BookingError::InvalidDatetime(value.to_string());
        let (start, end) = value.split_once(RANGE_SEPARATOR).ok_or_else(invalid)?;
        let start = NaiveDateTime::parse_from_str(start.trim(), BOOKING_DATETIME_FORMAT)
            .map_err(|_| invalid())?;
        let end = NaiveDateTime::parse_from_str(end.trim(), BOOKING_DATETIME_FORMAT)
            .map_err(|_| invalid())?;
        Self::new(start, end)
    }

    pub fn to_booking_datetime(&self) -> String {
        format!(
            "{}{}{}",
            self.start.format(BOOKING_DATETIME_FORMAT),
            RANGE_SEPARATOR,
            self.end.format(BOOKING_DATETIME_FORMAT)
        )
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    pub fn hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }
}

/// Billable hours: the booked hours, never less than the minimum.
pub fn total_hours(range: &RequestedRange, minimum_hours: u32) -> f64 {
    range.hours().max(f64::from(minimum_hours))
}

pub fn total_price(hours: f64, price_per_hour: f64) -> f64 {
    hours * price_per_hour
}

/// What a picked range would cost and whether it can be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuote {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub total_hours: f64,
    pub total_price: f64,
    pub bookable: bool,
}

impl BookingQuote {
    pub fn new(
        window: &ScheduleWindow,
        reservations: &[ReservationInterval],
        range: &RequestedRange,
        price_per_hour: f64,
    ) -> Self {
        let hours = total_hours(range, window.minimum_hours);
        Self {
            start: range.start,
            end: range.end,
            total_hours: hours,
            total_price: total_price(hours, price_per_hour),
            bookable: is_range_bookable(window, reservations, range),
        }
    }
}

/// A booking that passed every check and can be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub range: RequestedRange,
    pub vehicle: i64,
    pub method: PaymentMethod,
}

/// Runs the checkout checks in the order a renter meets them: the
/// duration, its availability, the vehicle, then the payment method.
pub fn validate_booking(
    window: &ScheduleWindow,
    reservations: &[ReservationInterval],
    range: Option<RequestedRange>,
    vehicle: Option<i64>,
    method: Option<PaymentMethod>,
) -> Result<ValidatedBooking, BookingError> {
    let range = range.ok_or(BookingError::EmptyDuration)?;
    if range.end <= range.start {
        return Err(BookingError::EmptyDuration);
    }
    if !is_range_bookable(window, reservations, &range) {
        return Err(BookingError::Unavailable);
    }
    let vehicle = vehicle.ok_or(BookingError::MissingVehicle)?;
    let method = method.ok_or(BookingError::MissingPaymentMethod)?;

    Ok(ValidatedBooking {
        range,
        vehicle,
        method,
    })
}
