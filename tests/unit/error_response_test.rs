use axum::http::StatusCode;
use user_service::api::response::error_response::status_for;
use user_service::domain::error::ErrorCode;

#[test]
fn it_maps_missing_user_to_not_found() {
    assert_eq!(status_for(ErrorCode::UserDoesNotExist), StatusCode::NOT_FOUND);
}

#[test]
fn it_maps_unexpected_error_to_internal_server_error() {
    assert_eq!(
        status_for(ErrorCode::UnexpectedError),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn it_maps_validation_error_to_bad_request() {
    assert_eq!(status_for(ErrorCode::ValidationError), StatusCode::BAD_REQUEST);
}
