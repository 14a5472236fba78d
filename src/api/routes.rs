use crate::api::controller::health_controller::*;
use crate::api::controller::user_controller::*;
use crate::api::dto::*;
use crate::api::server_state::ServerState;
use crate::domain::error::ErrorCode;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn routes(state: ServerState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/v1/health", get(health_action))
        .route("/v1/users", get(list_users).post(create_user))
        .route(
            "/v1/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    servers(
        (description="dev", url="http://localhost:8080"),
    ),
    paths(
        health_action,
        create_user,
        list_users,
        get_user,
        update_user,
        delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            DeletedResponse,
            ErrorResponse,
            ErrorCode,
        ),
    )
)]
pub struct ApiDoc;
