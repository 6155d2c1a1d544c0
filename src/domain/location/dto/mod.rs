pub mod location_item;
pub mod location_search_request;
