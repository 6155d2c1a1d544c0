use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::location_entity::{BoundingBox, LocationEntity};
use super::location_store_adapter_trait::LocationStoreAdapterTrait;

// CASTs keep decoding stable for the legacy table whose columns were declared `number`.
const SELECT_COLUMNS: &str = "SELECT CAST(name AS TEXT) AS name, \
    CAST(addr1 AS TEXT) AS addr1, \
    CAST(addr2 AS TEXT) AS addr2, \
    CAST(latitude AS REAL) AS latitude, \
    CAST(longitude AS REAL) AS longitude, \
    CAST(phone AS TEXT) AS phone \
    FROM location";

const WITHIN_FILTER: &str = "WHERE latitude BETWEEN ? AND ? AND longitude BETWEEN ? AND ?";

const NAME_FILTER: &str = "WHERE name LIKE ? ESCAPE '\\' \
    AND latitude IS NOT NULL AND longitude IS NOT NULL";

/// SQLite adapter over the `location` table.
pub struct LocationSqliteAdapter {
    pool: SqlitePool,
}

impl LocationSqliteAdapter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStoreAdapterTrait for LocationSqliteAdapter {
    async fn count_within(&self, bbox: &BoundingBox) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM location {}", WITHIN_FILTER);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(bbox.min_latitude)
            .bind(bbox.max_latitude)
            .bind(bbox.min_longitude)
            .bind(bbox.max_longitude)
            .fetch_one(&self.pool)
            .await
            .context("Failed to count nearby locations")?;

        Ok(count.max(0) as u64)
    }

    async fn find_within(
        &self,
        bbox: &BoundingBox,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<LocationEntity>> {
        let sql = format!(
            "{} {} ORDER BY rowid LIMIT ? OFFSET ?",
            SELECT_COLUMNS, WITHIN_FILTER
        );
        let rows = sqlx::query(&sql)
            .bind(bbox.min_latitude)
            .bind(bbox.max_latitude)
            .bind(bbox.min_longitude)
            .bind(bbox.max_longitude)
            .bind(i64::from(limit))
            .bind(to_sql_offset(offset))
            .fetch_all(&self.pool)
            .await
            .context("Failed to load nearby locations")?;

        rows.iter().map(map_row).collect()
    }

    async fn count_by_name(&self, keyword: &str) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM location {}", NAME_FILTER);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(like_pattern(keyword))
            .fetch_one(&self.pool)
            .await
            .context("Failed to count locations by name")?;

        Ok(count.max(0) as u64)
    }

    async fn find_by_name(
        &self,
        keyword: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<LocationEntity>> {
        let sql = format!(
            "{} {} ORDER BY rowid LIMIT ? OFFSET ?",
            SELECT_COLUMNS, NAME_FILTER
        );
        let rows = sqlx::query(&sql)
            .bind(like_pattern(keyword))
            .bind(i64::from(limit))
            .bind(to_sql_offset(offset))
            .fetch_all(&self.pool)
            .await
            .context("Failed to load locations by name")?;

        rows.iter().map(map_row).collect()
    }
}

fn map_row(row: &SqliteRow) -> Result<LocationEntity> {
    Ok(LocationEntity {
        name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        addr1: row.try_get("addr1")?,
        addr2: row.try_get("addr2")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        phone: row.try_get("phone")?,
    })
}

fn to_sql_offset(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// `%keyword%` with LIKE metacharacters escaped so the keyword matches literally.
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
