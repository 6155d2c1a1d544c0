//! Image processing controller: connects routes to the image processing service
//!
//! Handlers are free functions so `#[utoipa::path]` can document each one.

use axum::extract::State;
use axum::Json;

use crate::api::util::json::ApiJson;
use crate::app_state::AppState;
use crate::domain::llm::dto::image_processing_request::{
    ImageProcessingRequest, ImageProcessingResponse,
};
use crate::errors::{AppError, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/v1/image-processing",
    tag = "image-processing",
    request_body = ImageProcessingRequest,
    responses(
        (status = 200, description = "Success", body = ImageProcessingResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn process_image(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ImageProcessingRequest>,
) -> Result<Json<ImageProcessingResponse>, AppError> {
    let result = state.image_processing_service.process_image(payload).await?;
    Ok(Json(ImageProcessingResponse { result }))
}
