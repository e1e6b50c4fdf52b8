use crate::common::response::ApiResponse;
use crate::modules::movie::patch::PatchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Movie with id {0} not found")]
    NotFound(i32),

    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid patch document: {0}")]
    InvalidPatch(#[from] PatchError),

    /// Store or other unexpected failure. The message is never sent to clients.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Flattens validator output into field -> messages.
pub fn field_violations(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::error(&self.to_string()),
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::invalid(&self.to_string(), field_violations(errors)),
            ),
            AppError::InvalidPatch(_) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error(&self.to_string()),
            ),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error("An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
