pub mod friends_counter;
pub mod location_query_service;
