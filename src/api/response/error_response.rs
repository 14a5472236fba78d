use crate::api::dto::ErrorResponse;
use crate::api::validation::ValidationError;
use crate::domain::error::{ErrorCode, ServiceError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::UserDoesNotExist => StatusCode::NOT_FOUND,
        ErrorCode::UnexpectedError => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn error_response(code: ErrorCode, message: String, detail: Option<String>) -> Response {
    let status = status_for(code);

    (
        status,
        Json(ErrorResponse {
            status: status.canonical_reason().unwrap_or_default().to_string(),
            code,
            message,
            detail,
        }),
    )
        .into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error_response(self.code, self.message, None)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(field = self.field, "Rejected request: {}", &self.message);

        error_response(
            ErrorCode::ValidationError,
            self.message,
            Some(self.field.to_string()),
        )
    }
}
