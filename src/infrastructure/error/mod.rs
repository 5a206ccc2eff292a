use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),
}

/// JSON extractor whose rejections are reported through [`AppError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// HTTP status and stable error code for a template error
pub fn template_error_status(err: &TemplateError) -> (StatusCode, &'static str) {
    match err {
        TemplateError::NotFound(_) => (StatusCode::NOT_FOUND, "TEMPLATE_NOT_FOUND"),
        TemplateError::AlreadyExists(_) => (StatusCode::CONFLICT, "TEMPLATE_EXISTS"),
        TemplateError::InvalidId(_) => (StatusCode::BAD_REQUEST, "INVALID_ID"),
        TemplateError::InvalidTemplate(_) => (StatusCode::BAD_REQUEST, "INVALID_TEMPLATE"),
        TemplateError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT"),
        TemplateError::DuplicateToken(_) => (StatusCode::BAD_REQUEST, "DUPLICATE_TOKEN"),
        TemplateError::UnboundToken(_) => (StatusCode::UNPROCESSABLE_ENTITY, "UNBOUND_TOKEN"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, client_message, log_message) = match &self {
            AppError::Template(e) => {
                let (status, code) = template_error_status(e);
                (status, code, e.to_string(), e.to_string())
            }
            AppError::Body(rejection) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                rejection.body_text(),
                rejection.body_text(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(
                code = %code,
                status = %status.as_u16(),
                message = %log_message,
                "API error"
            );
        } else {
            tracing::debug!(
                code = %code,
                status = %status.as_u16(),
                message = %log_message,
                "API request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
