use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /api/v1/locations`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NearbyLocationRequest {
    /// Center latitude in decimal degrees.
    #[schema(example = 37.5665)]
    pub latitude: f64,
    /// Center longitude in decimal degrees.
    #[schema(example = 126.978)]
    pub longitude: f64,
    /// 1-based page number, defaults to 1.
    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Body of `POST /api/v1/search`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct KeywordSearchRequest {
    /// Substring to look for in facility names. Empty matches everything.
    #[schema(example = "체육")]
    pub keyword: String,
    /// 1-based page number, defaults to 1.
    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}
