mod error_response_test;
mod validation_test;
