use sqlx::SqlitePool;

use super::location_api_repository_trait::LocationApiRepository;
use super::location_sqlite_adapter::LocationSqliteAdapter;
use super::location_store_adapter_trait::LocationStoreAdapterTrait;

pub struct LocationRepository {
    adapter: LocationSqliteAdapter,
}

impl LocationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            adapter: LocationSqliteAdapter::new(pool),
        }
    }
}

impl LocationApiRepository for LocationRepository {
    fn store_adapter(&self) -> &dyn LocationStoreAdapterTrait {
        &self.adapter
    }
}
