use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::location::dto::location_item::LocationItem;

/// One page of locations plus the size of the whole matching set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationPageResponse {
    pub result: Vec<LocationItem>,
    /// Number of matching rows before pagination.
    pub total_count: u64,
}
