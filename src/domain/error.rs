use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use utoipa::ToSchema;

/// Stable codes carried by every error that leaves the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorCode {
    UserDoesNotExist,
    UnexpectedError,
    ValidationError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UserDoesNotExist => "UserDoesNotExist",
            ErrorCode::UnexpectedError => "UnexpectedError",
            ErrorCode::ValidationError => "ValidationError",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `(code, message)` pair handed to callers of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub code: ErrorCode,
    pub message: String,
}

impl ServiceError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ServiceError {
            code,
            message: message.into(),
        }
    }

    pub fn user_does_not_exist(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::UserDoesNotExist, message)
    }

    pub fn unexpected(kind: &str, cause: impl fmt::Display) -> Self {
        ServiceError::new(ErrorCode::UnexpectedError, format!("{}: {}", kind, cause))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::ValidationError, message)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl Error for ServiceError {}
