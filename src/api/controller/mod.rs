pub mod image_processing;
pub mod location;
