//! Router for quoting, booking and managing reservations

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
};
use http::HeaderMap;

use super::public;
use crate::api::state::{SharedState, upstream_client};
use crate::checkout;

/// Price and bookability of a picked range
async fn quote(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<public::QuoteRequest>,
) -> Result<Json<public::BookingQuote>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    let quote = checkout::quote(&client, id, payload.start, payload.end).await?;
    Ok(Json(quote))
}

/// Book a range and record its payment
async fn reserve(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<public::BookingRequest>,
) -> Result<(StatusCode, Json<public::Receipt>), crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    let receipt = checkout::checkout(&client, id, &payload).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Reservations made by the caller
async fn list(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<Vec<public::Reservation>>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    Ok(Json(client.renter_reservations().await?))
}

async fn change_vehicle(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<public::ReservationUpdate>,
) -> Result<StatusCode, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    checkout::change_vehicle(&client, id, payload.vehicle).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn cancel(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    checkout::cancel(&client, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Vehicles the caller can book with
async fn vehicles(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<Vec<public::VehicleChoice>>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    let vehicles = client.vehicles().await?;
    Ok(Json(vehicles.iter().map(public::VehicleChoice::from).collect()))
}

/// Create the reservations router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/schedules/{id}/quote", post(quote))
        .route("/schedules/{id}/reservations", post(reserve))
        .route("/reservations", get(list))
        .route("/reservations/{id}", put(change_vehicle).delete(cancel))
        .route("/vehicles", get(vehicles))
}
