//! Public types for the dashboard API
use serde::Serialize;

use crate::fetch::FetchState;
use crate::insights::{RatingSummary, ReservationSummary, WithdrawalSummary};
use crate::marketplace::Reservation;

/// Each section settles on its own so one failing upstream read does
/// not blank the whole dashboard
#[derive(Serialize, Debug)]
pub struct DashboardSummary {
    pub reservations: FetchState<ReservationSummary>,
    /// Upcoming reservations starting today, earliest first
    pub upcoming_today: FetchState<Vec<Reservation>>,
    pub withdrawals: FetchState<WithdrawalSummary>,
    pub ratings: FetchState<RatingSummary>,
    pub balance: FetchState<Option<f64>>,
}
