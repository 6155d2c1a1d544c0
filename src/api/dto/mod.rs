//! API response DTOs

pub mod paginated_response;
