// Test Assertion Helpers
//
// Common assertions for relay responses.

use actix_web::http::StatusCode;
use serde_json::Value;

/// Assert the status code and return the `message` field of the body
///
/// # Panics
/// If the status differs or the body has no string `message`
pub fn assert_error_message(status: StatusCode, body: &Value, expected: u16) -> String {
    assert_eq!(
        status.as_u16(),
        expected,
        "Expected {} got {} with body {}",
        expected,
        status.as_u16(),
        body
    );
    body["message"]
        .as_str()
        .unwrap_or_else(|| panic!("Expected a message in {}", body))
        .to_string()
}

/// Assert the body contains nothing but the `message` field
pub fn assert_only_message(body: &Value) {
    let object = body.as_object().expect("Expected a JSON object");
    assert_eq!(object.len(), 1, "Unexpected fields in {}", body);
    assert!(object.contains_key("message"));
}
