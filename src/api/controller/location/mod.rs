//! Location controller: connects routes to the location query service
//!
//! Handlers are free functions so `#[utoipa::path]` can document each one.

use axum::extract::State;
use axum::Json;

use crate::api::dto::paginated_response::LocationPageResponse;
use crate::api::util::json::{validated, ApiJson};
use crate::app_state::AppState;
use crate::domain::common::pagination::Page;
use crate::domain::location::dto::location_search_request::{
    KeywordSearchRequest, NearbyLocationRequest,
};
use crate::errors::{store_error, AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/v1/locations",
    tag = "locations",
    request_body = NearbyLocationRequest,
    responses(
        (status = 200, description = "Success", body = LocationPageResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn find_nearby(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NearbyLocationRequest>,
) -> Result<Json<LocationPageResponse>, AppError> {
    let payload = validated(payload)?;
    let page = to_page(payload.page);

    state
        .location_service
        .find_nearby(payload.latitude, payload.longitude, page)
        .await
        .map(Json)
        .map_err(store_error)
}

#[utoipa::path(
    post,
    path = "/api/v1/search",
    tag = "locations",
    request_body = KeywordSearchRequest,
    responses(
        (status = 200, description = "Success", body = LocationPageResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn search_by_keyword(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<KeywordSearchRequest>,
) -> Result<Json<LocationPageResponse>, AppError> {
    let payload = validated(payload)?;
    let page = to_page(payload.page);

    state
        .location_service
        .find_by_keyword(&payload.keyword, page)
        .await
        .map(Json)
        .map_err(store_error)
}

/// `page` has already passed the `range(min = 1)` rule, so only `None` maps to the first page.
fn to_page(page: Option<u32>) -> Page {
    page.and_then(Page::new).unwrap_or_default()
}
