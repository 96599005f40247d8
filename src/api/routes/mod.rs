//! API routes module

pub mod availability;
pub mod dashboard;
pub mod reservations;
pub mod reviews;
pub mod search;
pub mod withdrawals;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Free time of a schedule
        .merge(availability::router())
        // Quotes, bookings and the renter's reservations
        .merge(reservations::router())
        .merge(reviews::router())
        // Schedule search
        .merge(search::router())
        // Host dashboard and payouts
        .nest("/dashboard", dashboard::router())
        .merge(withdrawals::router())
}
