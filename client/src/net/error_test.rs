use super::*;

#[test]
fn from_response_extracts_message() {
    let err = ApiError::from_response(400, r#"{"message":"User already exists"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("User already exists".into()) });
    assert_eq!(err.body_message(), Some("User already exists"));
}

#[test]
fn from_response_handles_non_json_body() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[test]
fn blank_message_counts_as_absent() {
    let err = ApiError::Status { status: 400, message: Some("   ".into()) };
    assert_eq!(err.body_message(), None);
}

#[test]
fn status_classes() {
    let bad_request = ApiError::Status { status: 404, message: None };
    assert!(bad_request.is_client_error());
    assert!(!bad_request.is_server_error());

    let unavailable = ApiError::Status { status: 503, message: None };
    assert!(unavailable.is_server_error());

    let offline = ApiError::Network("failed to fetch".into());
    assert_eq!(offline.status(), None);
    assert!(!offline.is_client_error());
    assert!(!offline.is_server_error());
    assert_eq!(offline.body_message(), None);
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(err.to_string(), "request failed with status 401");
}
