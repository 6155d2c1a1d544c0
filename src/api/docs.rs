use utoipa::OpenApi;

use crate::api::controller::{image_processing, location};
use crate::api::dto::paginated_response::LocationPageResponse;
use crate::domain::llm::dto::image_processing_request::{
    ImageProcessingRequest, ImageProcessingResponse,
};
use crate::domain::location::dto::location_item::LocationItem;
use crate::domain::location::dto::location_search_request::{
    KeywordSearchRequest, NearbyLocationRequest,
};
use crate::errors::ErrorResponse;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "너나들이 API 문서",
        version = "1.0",
        description = "Image processing through an LLM and nearby facility lookup"
    ),
    paths(
        image_processing::process_image,
        location::find_nearby,
        location::search_by_keyword,
    ),
    components(schemas(
        ImageProcessingRequest,
        ImageProcessingResponse,
        NearbyLocationRequest,
        KeywordSearchRequest,
        LocationItem,
        LocationPageResponse,
        ErrorResponse,
    )),
    tags(
        (name = "image-processing", description = "LLM image analysis"),
        (name = "locations", description = "Facility lookup")
    )
)]
pub struct ApiDoc;
