pub mod fence;
pub mod image_processing_service;
pub mod prompt_template;
