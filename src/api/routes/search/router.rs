//! Router for the schedule search API

use axum::{Router, extract::State, response::Json};
use axum_extra::extract::Query;
use http::HeaderMap;

use super::public;
use crate::api::state::{SharedState, page_size, upstream_client};
use crate::listing::paginate;

/// Search bookable schedules
async fn search(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<public::SearchQuery>,
) -> Result<Json<public::Page<public::Schedule>>, crate::api::public::ApiError> {
    let client = upstream_client(&state, &headers)?;
    let per_page = match params.per_page {
        Some(n) => n,
        None => page_size(&state)?,
    };

    let schedules = client.search_schedules().await?;
    let found = params.search.apply(schedules);

    Ok(Json(paginate(found, params.page.unwrap_or(1), per_page)))
}

/// Create the search router
pub fn router() -> Router<SharedState> {
    Router::new().route("/schedules/search", axum::routing::get(search))
}
