use axum::{routing::post, Router};

use crate::api::controller::image_processing;
use crate::app_state::AppState;

pub fn image_processing_routes() -> Router<AppState> {
    Router::new().route("/image-processing", post(image_processing::process_image))
}
