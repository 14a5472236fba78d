use crate::api::dto::{
    CreateUserRequest, DeletedResponse, ErrorResponse, UpdateUserRequest, UserResponse,
};
use crate::api::server_state::ServerState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(post, path = "/v1/users",
    tag="users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", content_type = "application/json", body = UserResponse),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity"),
        (status = 500, description = "Unexpected error", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<ServerState>,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        return e.into_response();
    }

    match state.user_service.create_user(request.into()).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(user))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(get, path = "/v1/users",
    tag="users",
    responses(
        (status = 200, description = "List of users", content_type = "application/json", body = Vec<UserResponse>),
        (status = 500, description = "Unexpected error", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn list_users(State(state): State<ServerState>) -> impl IntoResponse {
    match state.user_service.get_all_users().await {
        Ok(users) => {
            let items: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(get, path = "/v1/users/{id}",
    tag="users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", content_type = "application/json", body = UserResponse),
        (status = 404, description = "User not found", content_type = "application/json", body = ErrorResponse),
        (status = 500, description = "Unexpected error", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn get_user(State(state): State<ServerState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.user_service.get_user(id).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(put, path = "/v1/users/{id}",
    tag="users",
    request_body = UpdateUserRequest,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User updated", content_type = "application/json", body = UserResponse),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 404, description = "User not found", content_type = "application/json", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity"),
        (status = 500, description = "Unexpected error", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn update_user(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        return e.into_response();
    }

    match state.user_service.update_user(id, request.into()).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(delete, path = "/v1/users/{id}",
    tag="users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", content_type = "application/json", body = DeletedResponse),
        (status = 404, description = "User not found", content_type = "application/json", body = ErrorResponse),
        (status = 500, description = "Unexpected error", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn delete_user(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.user_service.delete_user(id).await {
        Ok(user) => (
            StatusCode::OK,
            Json(DeletedResponse {
                code: "UserDeleted".to_string(),
                message: format!("User with id {} deleted successfully.", user.id),
                data: UserResponse::from(user),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
