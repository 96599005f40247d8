//! Router for the host dashboard API

use axum::{Router, extract::State, response::Json};
use chrono::Local;
use http::HeaderMap;

use super::public;
use crate::api::state::{SharedState, upstream_client};
use crate::fetch::FetchState;
use crate::insights::{RatingSummary, ReservationSummary, WithdrawalSummary, upcoming_on};

/// Reservation, withdrawal and review aggregates of the signed in host
async fn summary(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<public::DashboardSummary>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    let today = Local::now().date_naive();

    let (reservations, withdrawals, reviews, user) = tokio::join!(
        FetchState::load(client.reservations()),
        FetchState::load(client.withdrawals()),
        FetchState::load(client.reviews()),
        FetchState::load(client.current_user()),
    );

    let upcoming_today = reservations
        .clone()
        .map(|r| upcoming_on(&r, today).into_iter().cloned().collect());

    Ok(Json(public::DashboardSummary {
        reservations: reservations.map(|r| ReservationSummary::new(&r, today)),
        upcoming_today,
        withdrawals: withdrawals.map(|w| WithdrawalSummary::new(&w)),
        ratings: reviews.map(|r| RatingSummary::new(&r)),
        balance: user.map(|u| u.balance),
    }))
}

/// Create the dashboard router
pub fn router() -> Router<SharedState> {
    Router::new().route("/summary", axum::routing::get(summary))
}
