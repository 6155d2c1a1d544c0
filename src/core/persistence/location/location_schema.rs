use anyhow::{Context, Result};
use sqlx::SqlitePool;

const CREATE_LOCATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS location (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    addr1 TEXT,
    addr2 TEXT,
    latitude REAL,
    longitude REAL,
    phone TEXT
)
"#;

/// Create the `location` table if it does not exist yet. Safe to call repeatedly.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_LOCATION_TABLE)
        .execute(pool)
        .await
        .context("Failed to create location table")?;
    Ok(())
}
