use std::sync::Arc;

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::db::connect_lazy;
use crate::core::persistence::location::location_repository::LocationRepository;
use crate::domain::llm::service::image_processing_service::ImageProcessingService;
use crate::domain::location::service::friends_counter::{FriendsCounter, RandomFriendsCounter};
use crate::domain::location::service::location_query_service::LocationQueryService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub location_service: Arc<LocationQueryService<LocationRepository>>,
    pub image_processing_service: Arc<ImageProcessingService>,
}

/// Production wiring: random friends figure per row.
pub fn build_app_state(config: AppConfig) -> Result<AppState> {
    build_app_state_with(config, Arc::new(RandomFriendsCounter))
}

pub fn build_app_state_with(config: AppConfig, friends: Arc<dyn FriendsCounter>) -> Result<AppState> {
    let pool = connect_lazy(&config.database_path)?;
    let image_processing_service = ImageProcessingService::new(config.llm.clone())?;

    Ok(AppState {
        location_service: Arc::new(LocationQueryService::new(
            LocationRepository::new(pool),
            friends,
        )),
        image_processing_service: Arc::new(image_processing_service),
        config: Arc::new(config),
    })
}
