//! Offline CSV loader for the public facility dataset.
//!
//! Expected headers (surrounding whitespace is ignored):
//! `대상시설명`, `소재지도로명주소`, `소재지지번주소`, `위도`, `경도`, `관리기관전화번호`.
//! The file must be UTF-8; re-encode CP949 exports before importing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use super::location_entity::LocationEntity;

#[derive(Debug, Deserialize)]
struct CsvLocationRecord {
    #[serde(rename = "대상시설명")]
    name: Option<String>,
    #[serde(rename = "소재지도로명주소")]
    road_address: Option<String>,
    #[serde(rename = "소재지지번주소")]
    lot_address: Option<String>,
    #[serde(rename = "위도")]
    latitude: Option<String>,
    #[serde(rename = "경도")]
    longitude: Option<String>,
    #[serde(rename = "관리기관전화번호")]
    phone: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Parse CSV rows into entities. Rows without numeric coordinates are skipped
/// and counted, so the table never holds NULL coordinates.
pub fn read_locations_csv<R: Read>(reader: R) -> Result<(Vec<LocationEntity>, usize)> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0;

    for (idx, record) in rdr.deserialize::<CsvLocationRecord>().enumerate() {
        // +2: header line plus 1-based numbering
        let line = idx + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!(line, error = %e, "Skipping malformed CSV row");
                skipped += 1;
                continue;
            }
        };

        let (Some(latitude), Some(longitude)) = (
            parse_coordinate(record.latitude.as_deref()),
            parse_coordinate(record.longitude.as_deref()),
        ) else {
            warn!(line, name = ?record.name, "Skipping row without coordinates");
            skipped += 1;
            continue;
        };

        rows.push(LocationEntity {
            name: non_empty(record.name).unwrap_or_default(),
            addr1: non_empty(record.road_address),
            addr2: non_empty(record.lot_address),
            latitude,
            longitude,
            phone: non_empty(record.phone),
        });
    }

    Ok((rows, skipped))
}

/// Insert rows in a single transaction. Returns the number inserted.
pub async fn insert_locations(pool: &SqlitePool, rows: &[LocationEntity]) -> Result<usize> {
    let mut tx = pool.begin().await.context("Failed to begin import transaction")?;

    for row in rows {
        sqlx::query(
            "INSERT INTO location (name, addr1, addr2, latitude, longitude, phone) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&row.name)
        .bind(&row.addr1)
        .bind(&row.addr2)
        .bind(row.latitude)
        .bind(row.longitude)
        .bind(&row.phone)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to insert location {:?}", row.name))?;
    }

    tx.commit().await.context("Failed to commit import")?;
    debug!(count = rows.len(), "Inserted locations");
    Ok(rows.len())
}

pub async fn import_csv(pool: &SqlitePool, csv_path: &Path) -> Result<ImportSummary> {
    let file = File::open(csv_path)
        .with_context(|| format!("CSV file not found: {}", csv_path.display()))?;
    let (rows, skipped) = read_locations_csv(file)?;
    let inserted = insert_locations(pool, &rows).await?;
    Ok(ImportSummary { inserted, skipped })
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
