use anyhow::Result;
use async_trait::async_trait;

use super::location_entity::{BoundingBox, LocationEntity};
use super::location_store_adapter_trait::LocationStoreAdapterTrait;

/// API-facing repository abstraction for the location table.
#[async_trait]
pub trait LocationApiRepository: Send + Sync {
    fn store_adapter(&self) -> &dyn LocationStoreAdapterTrait;

    async fn count_within(&self, bbox: &BoundingBox) -> Result<u64> {
        self.store_adapter().count_within(bbox).await
    }

    async fn find_within(
        &self,
        bbox: &BoundingBox,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<LocationEntity>> {
        self.store_adapter().find_within(bbox, limit, offset).await
    }

    async fn count_by_name(&self, keyword: &str) -> Result<u64> {
        self.store_adapter().count_by_name(keyword).await
    }

    async fn find_by_name(
        &self,
        keyword: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<LocationEntity>> {
        self.store_adapter().find_by_name(keyword, limit, offset).await
    }
}
