//! Router for schedule reviews

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, put},
};
use http::HeaderMap;

use super::public;
use crate::api::state::{SharedState, upstream_client};
use crate::checkout;
use crate::insights::RatingSummary;

/// Reviews of a schedule with their star distribution
async fn schedule_reviews(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<public::ScheduleReviews>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    let reviews = client.schedule_reviews(id).await?;
    Ok(Json(public::ScheduleReviews {
        schedule_id: id,
        summary: RatingSummary::new(&reviews),
        reviews,
    }))
}

async fn review(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<public::ReviewDraft>,
) -> Result<Json<public::ReviewResponse>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    let outcome = checkout::review(&client, id, &payload).await?;
    Ok(Json(public::ReviewResponse { outcome }))
}

/// Create the reviews router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/schedules/{id}/reviews", get(schedule_reviews))
        .route("/reservations/{id}/review", put(review))
}
