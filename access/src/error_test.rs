use super::*;

// =============================================================
// ApiError::from_status
// =============================================================

#[test]
fn unauthorized_keeps_optional_message() {
    assert_eq!(
        ApiError::from_status(401, r#"{"message":"Session expired"}"#),
        ApiError::Unauthenticated { message: Some("Session expired".to_owned()) }
    );
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthenticated { message: None });
}

#[test]
fn client_errors_are_validation_failures() {
    let err = ApiError::from_status(409, r#"{"message":"Email already registered"}"#);
    assert_eq!(err, ApiError::Validation { status: 409, message: "Email already registered".to_owned() });
    assert_eq!(err.message(), Some("Email already registered"));
}

#[test]
fn server_errors_fall_back_to_generic_message() {
    let err = ApiError::from_status(503, "<html>down</html>");
    assert_eq!(err, ApiError::Status { status: 503, message: "request failed with status 503".to_owned() });
}

#[test]
fn network_errors_have_no_backend_message() {
    assert_eq!(ApiError::Network("refused".to_owned()).message(), None);
}

// =============================================================
// AuthError mapping
// =============================================================

#[test]
fn login_rejection_becomes_invalid_credentials() {
    let err = AuthError::from_login(ApiError::from_status(400, r#"{"message":"Wrong password"}"#));
    assert_eq!(err, AuthError::InvalidCredentials("Wrong password".to_owned()));
    assert_eq!(err.user_message(), "Wrong password");
}

#[test]
fn login_401_without_message_uses_default() {
    let err = AuthError::from_login(ApiError::Unauthenticated { message: None });
    assert_eq!(err, AuthError::InvalidCredentials(DEFAULT_INVALID_CREDENTIALS.to_owned()));
}

#[test]
fn registration_rejection_becomes_validation() {
    let err = AuthError::from_registration(ApiError::from_status(400, r#"{"message":"User already exists"}"#));
    assert_eq!(err, AuthError::Validation("User already exists".to_owned()));
}

#[test]
fn transport_failures_map_by_kind() {
    assert_eq!(
        AuthError::from_login(ApiError::Network("timeout".to_owned())),
        AuthError::Network("timeout".to_owned())
    );
    assert!(matches!(
        AuthError::from_registration(ApiError::from_status(500, "")),
        AuthError::Server { status: 500, .. }
    ));
    assert!(matches!(AuthError::from_login(ApiError::Decode("eof".to_owned())), AuthError::MalformedResponse(_)));
}

#[test]
fn user_message_hides_transport_detail() {
    let err = AuthError::Network("tcp connect error: refused".to_owned());
    assert!(!err.user_message().contains("tcp"));
    assert_eq!(AuthError::Form(FormError::InvalidEmail).user_message(), "Enter a valid email address.");
}
