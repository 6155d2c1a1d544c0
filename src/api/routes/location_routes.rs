use axum::{routing::post, Router};

use crate::api::controller::location;
use crate::app_state::AppState;

pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/locations", post(location::find_nearby))
        .route("/search", post(location::search_by_keyword))
}
