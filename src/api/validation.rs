use crate::api::dto::{CreateUserRequest, UpdateUserRequest};
use lazy_regex::regex_is_match;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            field,
            message: message.into(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    regex_is_match!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
        email
    )
}

fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    if first_name.trim().is_empty() {
        return Err(ValidationError::new(
            "first_name",
            "First name must not be empty",
        ));
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::new(
            "email",
            format!("Invalid email: {}", email),
        ));
    }

    Ok(())
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_first_name(&self.first_name)?;
        validate_email(&self.email)
    }
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(first_name) = &self.first_name {
            validate_first_name(first_name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }

        Ok(())
    }
}
