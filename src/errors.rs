use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    /// The chat-completion endpoint could not be reached or answered non-2xx.
    #[error("Failed to communicate with OpenAI API")]
    Transport(String),

    /// The reply decoded but lacked `choices[0].message.content`.
    #[error("Unexpected response structure from OpenAI API")]
    StructuralResponse(String),

    /// The fence-stripped reply is not valid JSON.
    #[error("Failed to parse response from OpenAI API")]
    Parse(String),

    #[error("Failed to build prompt")]
    PromptTemplate(String),

    #[error("Failed to query location database")]
    Store(String),

    #[error("Invalid request")]
    BadRequest(String),

    #[error("Not found")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Transport(_)
            | AppError::StructuralResponse(_)
            | AppError::Parse(_)
            | AppError::PromptTemplate(_)
            | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn details(&self) -> &str {
        match self {
            AppError::Transport(d)
            | AppError::StructuralResponse(d)
            | AppError::Parse(d)
            | AppError::PromptTemplate(d)
            | AppError::Store(d)
            | AppError::BadRequest(d)
            | AppError::NotFound(d) => d,
        }
    }
}

/// Map a store failure, keeping the full anyhow context chain in `details`.
pub fn store_error(err: anyhow::Error) -> AppError {
    AppError::Store(format!("{:#}", err))
}

/// Error body shared by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short summary of the failure kind.
    pub error: String,
    /// Underlying cause.
    pub details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, details = self.details(), "request failed");
        } else {
            tracing::debug!(error = %self, details = self.details(), "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            details: self.details().to_string(),
        });

        (status, body).into_response()
    }
}
