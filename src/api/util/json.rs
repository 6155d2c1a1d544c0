use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use validator::Validate;

use crate::errors::AppError;

/// `axum::Json` whose rejection renders as the shared `{error, details}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Run `validator` rules, mapping failures to a 400.
pub fn validated<T: Validate>(payload: T) -> Result<T, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(payload)
}
