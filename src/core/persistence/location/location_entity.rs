use serde::{Deserialize, Serialize};

/// One row of the `location` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntity {
    /// Facility display name.
    pub name: String,
    /// Road-name address.
    pub addr1: Option<String>,
    /// Lot-number address.
    pub addr2: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
}

/// Axis-aligned latitude/longitude box, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Box extending `delta` degrees from the center on both axes.
    pub fn around(latitude: f64, longitude: f64, delta: f64) -> Self {
        Self {
            min_latitude: latitude - delta,
            max_latitude: latitude + delta,
            min_longitude: longitude - delta,
            max_longitude: longitude + delta,
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
            && (self.min_longitude..=self.max_longitude).contains(&longitude)
    }
}
