//! Router for the availability API

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
};
use http::HeaderMap;

use super::public;
use crate::api::state::{SharedState, upstream_client};
use crate::availability::{compute_free_intervals, unavailable_intervals};
use crate::marketplace::blocking_intervals;

/// Free time of a schedule, resolved from its current reservations
async fn get_availability(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<public::AvailabilityResponse>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;

    let (schedule, reservations) =
        tokio::join!(client.schedule(id), client.schedule_reservations(id));
    let window = schedule?.window();
    let blocking = blocking_intervals(&reservations?);

    Ok(Json(public::AvailabilityResponse {
        schedule_id: id,
        minimum_hours: window.minimum_hours,
        available: compute_free_intervals(&window, &blocking),
        unavailable: unavailable_intervals(&blocking),
    }))
}

/// Create the availability router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/schedules/{id}/availability",
        axum::routing::get(get_availability),
    )
}
