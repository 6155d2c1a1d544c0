//! API route declarations (e.g., /api/v1/*)

pub mod image_processing_routes;
pub mod location_routes;
