use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /api/v1/image-processing`. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageProcessingRequest {
    /// The type of processing.
    #[serde(rename = "type")]
    pub kind: String,
    /// The emotion to apply.
    pub emotion: String,
    /// The voice text to use.
    pub voice_text: String,
    /// The URL of the image to process.
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageProcessingResponse {
    /// JSON object produced by the model.
    #[schema(value_type = Object)]
    pub result: Value,
}
