pub mod chat_completion;
pub mod image_processing_request;
