use user_service::api::dto::{CreateUserRequest, UpdateUserRequest};
use user_service::api::validation::is_valid_email;

#[test]
fn it_accepts_valid_emails() {
    assert!(is_valid_email("rosal@gmail.com"));
    assert!(is_valid_email("jon.snow+wall@night-watch.test"));
}

#[test]
fn it_rejects_invalid_emails() {
    assert!(!is_valid_email("test-user"));
    assert!(!is_valid_email("jon@"));
    assert!(!is_valid_email("@snow.test"));
    assert!(!is_valid_email("jon@snow"));
    assert!(!is_valid_email(""));
}

#[test]
fn it_accepts_valid_create_request() {
    let request = CreateUserRequest {
        first_name: "Davi".to_string(),
        last_name: None,
        email: "davi@x.com".to_string(),
    };

    assert!(request.validate().is_ok());
}

#[test]
fn it_rejects_blank_first_name() {
    let request = CreateUserRequest {
        first_name: "   ".to_string(),
        last_name: None,
        email: "davi@x.com".to_string(),
    };

    let error = request.validate().unwrap_err();

    assert_eq!(error.field, "first_name");
    assert_eq!(error.message, "First name must not be empty");
}

#[test]
fn it_rejects_invalid_email_on_create() {
    let request = CreateUserRequest {
        first_name: "Davi".to_string(),
        last_name: None,
        email: "davi".to_string(),
    };

    let error = request.validate().unwrap_err();

    assert_eq!(error.field, "email");
    assert_eq!(error.message, "Invalid email: davi");
}

#[test]
fn it_accepts_empty_update_request() {
    assert!(UpdateUserRequest::default().validate().is_ok());
}

#[test]
fn it_validates_present_fields_on_update() {
    let request = UpdateUserRequest {
        email: Some("not-an-email".to_string()),
        ..UpdateUserRequest::default()
    };

    let error = request.validate().unwrap_err();

    assert_eq!(error.field, "email");
}
