use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::api::dto::paginated_response::LocationPageResponse;
use crate::core::persistence::location::location_api_repository_trait::LocationApiRepository;
use crate::core::persistence::location::location_entity::{BoundingBox, LocationEntity};
use crate::domain::common::pagination::Page;
use crate::domain::location::dto::location_item::{LocationItem, OPERATION_TIME_PLACEHOLDER};

use super::friends_counter::FriendsCounter;

/// Half-width of the search box, in degrees, on each axis.
pub const NEARBY_DELTA_DEGREES: f64 = 0.05;

pub struct LocationQueryService<R: LocationApiRepository> {
    repo: R,
    friends: Arc<dyn FriendsCounter>,
}

impl<R: LocationApiRepository> LocationQueryService<R> {
    pub fn new(repo: R, friends: Arc<dyn FriendsCounter>) -> Self {
        Self { repo, friends }
    }

    /// Locations within ±0.05° of the given point on both axes.
    pub async fn find_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        page: Page,
    ) -> Result<LocationPageResponse> {
        let bbox = BoundingBox::around(latitude, longitude, NEARBY_DELTA_DEGREES);

        let total_count = self.repo.count_within(&bbox).await?;
        let rows = self
            .repo
            .find_within(&bbox, page.limit(), page.offset())
            .await?;

        debug!(
            latitude,
            longitude,
            page = page.number(),
            total_count,
            returned = rows.len(),
            "nearby lookup"
        );

        Ok(self.to_page(rows, total_count))
    }

    /// Locations whose name contains `keyword`, ASCII case-insensitive.
    pub async fn find_by_keyword(&self, keyword: &str, page: Page) -> Result<LocationPageResponse> {
        let total_count = self.repo.count_by_name(keyword).await?;
        let rows = self
            .repo
            .find_by_name(keyword, page.limit(), page.offset())
            .await?;

        debug!(
            keyword,
            page = page.number(),
            total_count,
            returned = rows.len(),
            "keyword lookup"
        );

        Ok(self.to_page(rows, total_count))
    }

    fn to_page(&self, rows: Vec<LocationEntity>, total_count: u64) -> LocationPageResponse {
        let result = rows
            .into_iter()
            .enumerate()
            .map(|(id, row)| LocationItem {
                id,
                facility_name: row.name,
                road_name_addr: row.addr1,
                number_addr: row.addr2,
                latitude: row.latitude,
                longitude: row.longitude,
                phone_number: row.phone,
                operation_time: OPERATION_TIME_PLACEHOLDER.to_string(),
                friends: self.friends.friends_nearby(),
            })
            .collect();

        LocationPageResponse {
            result,
            total_count,
        }
    }
}
