//! Aggregates shown on the host dashboard.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::marketplace::{Reservation, Review, Withdrawal};
use crate::models::{ReservationStatus, WithdrawalStatus};

/// Smallest amount a host can withdraw.
pub const MINIMUM_WITHDRAWAL: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReservationSummary {
    pub upcoming: usize,
    pub completed: usize,
    pub canceled: usize,
    /// Reservations of any live status created on the given day.
    pub today: usize,
    /// Amounts of every reservation that was not canceled.
    pub earnings: f64,
    pub today_earnings: f64,
}

impl ReservationSummary {
    pub fn new(reservations: &[Reservation], today: NaiveDate) -> Self {
        let mut summary = Self::default();
        for reservation in reservations {
            let created_today = reservation
                .created_at
                .is_some_and(|at| at.date() == today);

            match reservation.status {
                Some(ReservationStatus::Upcoming) => summary.upcoming += 1,
                Some(ReservationStatus::Completed) => summary.completed += 1,
                Some(ReservationStatus::Canceled) => summary.canceled += 1,
                _ => {}
            }
            if created_today
                && !matches!(reservation.status, Some(ReservationStatus::Removed) | None)
            {
                summary.today += 1;
            }

            if reservation.status == Some(ReservationStatus::Canceled) {
                continue;
            }
            let amount = reservation.amount.unwrap_or(0.0);
            summary.earnings += amount;
            if created_today {
                summary.today_earnings += amount;
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.upcoming + self.completed + self.canceled
    }
}

/// Upcoming reservations starting on `day`, earliest first.
pub fn upcoming_on(reservations: &[Reservation], day: NaiveDate) -> Vec<&Reservation> {
    let mut found: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.status == Some(ReservationStatus::Upcoming))
        .filter(|r| r.start_date_time.date() == day)
        .collect();
    found.sort_by_key(|r| r.start_date_time);
    found
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WithdrawalSummary {
    pub pending: f64,
    pub completed: f64,
    pub canceled: f64,
}

impl WithdrawalSummary {
    pub fn new(withdrawals: &[Withdrawal]) -> Self {
        withdrawals
            .iter()
            .fold(Self::default(), |mut summary, withdrawal| {
                let bucket = match withdrawal.status {
                    WithdrawalStatus::Pending => &mut summary.pending,
                    WithdrawalStatus::Completed => &mut summary.completed,
                    WithdrawalStatus::Canceled => &mut summary.canceled,
                };
                *bucket += withdrawal.amount;
                summary
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RatingSummary {
    /// `stars[0]` counts one star reviews.
    pub stars: [usize; 5],
    pub count: usize,
    /// Mean rounded to two decimals, 0 without reviews.
    pub average: f64,
}

impl RatingSummary {
    pub fn new(reviews: &[Review]) -> Self {
        let mut summary = Self::default();
        let mut total = 0u32;
        for review in reviews {
            if let Some(slot) = usize::from(review.rating)
                .checked_sub(1)
                .and_then(|i| summary.stars.get_mut(i))
            {
                *slot += 1;
            }
            total += u32::from(review.rating);
            summary.count += 1;
        }
        if summary.count > 0 {
            let mean = f64::from(total) / summary.count as f64;
            summary.average = (mean * 100.0).round() / 100.0;
        }
        summary
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WithdrawalError {
    #[error("The minimum withdrawal amount is ฿100")]
    BelowMinimum,
    #[error("Insufficient balance")]
    InsufficientBalance,
}

pub fn check_withdrawal(amount: f64, balance: f64) -> Result<(), WithdrawalError> {
    if amount < MINIMUM_WITHDRAWAL {
        return Err(WithdrawalError::BelowMinimum);
    }
    if amount > balance {
        return Err(WithdrawalError::InsufficientBalance);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone, Utc};
    use serde_json::json;

    fn reservation(status: u8, amount: f64, created: &str, start: &str) -> Reservation {
        serde_json::from_value(json!({
            "status": status,
            "amount": amount,
            "createdAt": created,
            "startDateTime": start,
            "endDateTime": "2024-03-10T23:00",
        }))
        .unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn it_summarizes_reservations() {
        let reservations = vec![
            reservation(1, 100.0, "2024-03-10T08:00:00", "2024-03-10T10:00"),
            reservation(2, 50.0, "2024-03-01T08:00:00", "2024-03-02T10:00"),
            reservation(3, 80.0, "2024-03-10T09:00:00", "2024-03-10T12:00"),
            reservation(4, 20.0, "2024-03-10T09:00:00", "2024-03-10T12:00"),
        ];
        let summary = ReservationSummary::new(&reservations, day(10));
        assert_eq!(summary.upcoming, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.canceled, 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.today, 2);
        assert_eq!(summary.earnings, 170.0);
        assert_eq!(summary.today_earnings, 120.0);
    }

    #[test]
    fn it_buckets_zoned_timestamps_by_local_day() {
        let zoned = |hour: u32, minute: u32| {
            let local = day(10).and_hms_opt(hour, minute, 0).unwrap();
            Local
                .from_local_datetime(&local)
                .earliest()
                .unwrap()
                .with_timezone(&Utc)
                .to_rfc3339()
        };
        let reservations = vec![
            reservation(1, 30.0, &zoned(0, 30), "2024-03-12T10:00"),
            reservation(1, 45.0, &zoned(23, 30), "2024-03-12T10:00"),
        ];
        let summary = ReservationSummary::new(&reservations, day(10));
        assert_eq!(summary.today, 2);
        assert_eq!(summary.today_earnings, 75.0);
    }

    #[test]
    fn it_lists_upcoming_reservations_of_a_day() {
        let reservations = vec![
            reservation(1, 0.0, "2024-03-01T00:00:00Z", "2024-03-10T15:00"),
            reservation(1, 0.0, "2024-03-01T00:00:00Z", "2024-03-10T09:00"),
            reservation(3, 0.0, "2024-03-01T00:00:00Z", "2024-03-10T08:00"),
            reservation(1, 0.0, "2024-03-01T00:00:00Z", "2024-03-11T08:00"),
        ];
        let found = upcoming_on(&reservations, day(10));
        assert_eq!(found.len(), 2);
        assert!(found[0].start_date_time < found[1].start_date_time);
    }

    #[test]
    fn it_sums_withdrawals_by_status() {
        let withdrawals: Vec<Withdrawal> = serde_json::from_value(json!([
            {"id": 1, "status": 1, "amount": "150.50"},
            {"id": 2, "status": "1", "amount": 100},
            {"id": 3, "status": 2, "amount": 300},
            {"id": 4, "status": 3, "amount": 120},
        ]))
        .unwrap();
        let summary = WithdrawalSummary::new(&withdrawals);
        assert_eq!(summary.pending, 250.5);
        assert_eq!(summary.completed, 300.0);
        assert_eq!(summary.canceled, 120.0);
    }

    #[test]
    fn it_distributes_ratings() {
        let reviews: Vec<Review> = serde_json::from_value(json!([
            {"reviewId": 1, "rating": 5},
            {"reviewId": 2, "rating": "4"},
            {"reviewId": 3, "rating": 4},
        ]))
        .unwrap();
        let summary = RatingSummary::new(&reviews);
        assert_eq!(summary.stars, [0, 0, 0, 2, 1]);
        assert_eq!(summary.average, 4.33);
        assert_eq!(RatingSummary::new(&[]).average, 0.0);
    }

    #[test]
    fn it_checks_withdrawal_requests() {
        assert_eq!(check_withdrawal(99.99, 500.0), Err(WithdrawalError::BelowMinimum));
        assert_eq!(
            check_withdrawal(600.0, 500.0),
            Err(WithdrawalError::InsufficientBalance)
        );
        assert_eq!(check_withdrawal(100.0, 100.0), Ok(()));
    }
}
