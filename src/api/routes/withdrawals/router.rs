//! Router for host withdrawals

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::post};
use http::HeaderMap;

use super::public;
use crate::api::state::{SharedState, upstream_client};
use crate::payout;

/// Request a payout of part of the caller's balance
async fn request(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<public::NewWithdrawal>,
) -> Result<StatusCode, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    payout::request_withdrawal(&client, &payload).await?;
    Ok(StatusCode::CREATED)
}

/// Create the withdrawals router
pub fn router() -> Router<SharedState> {
    Router::new().route("/withdrawals", post(request))
}
