use anyhow::Result;
use async_trait::async_trait;

use super::location_entity::{BoundingBox, LocationEntity};

/// Read access to the location table.
///
/// Rows come back in insertion order; `limit`/`offset` slice that order.
#[async_trait]
pub trait LocationStoreAdapterTrait: Send + Sync {
    async fn count_within(&self, bbox: &BoundingBox) -> Result<u64>;

    async fn find_within(
        &self,
        bbox: &BoundingBox,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<LocationEntity>>;

    /// Count rows whose name contains `keyword`, ASCII case-insensitive.
    async fn count_by_name(&self, keyword: &str) -> Result<u64>;

    async fn find_by_name(
        &self,
        keyword: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<LocationEntity>>;
}
