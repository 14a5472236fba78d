use crate::api::dto::HealthResponse;
use axum::Json;
use axum::http::StatusCode;

#[utoipa::path(get, path = "/v1/health",
    tag="utils",
    responses(
        (status = 200, description = "Service is up", content_type = "application/json", body = HealthResponse),
    )
)]
pub async fn health_action() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            message: String::from("OK"),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
