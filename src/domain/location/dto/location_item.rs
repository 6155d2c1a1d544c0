use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shown until real opening hours are collected.
pub const OPERATION_TIME_PLACEHOLDER: &str = "추가";

/// One facility as returned by the location endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationItem {
    /// Position within the returned page (0-based). Not a stable identifier.
    pub id: usize,
    pub facility_name: String,
    pub road_name_addr: Option<String>,
    pub number_addr: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: Option<String>,
    pub operation_time: String,
    /// Friends nearby, 0 to 8.
    pub friends: u8,
}
