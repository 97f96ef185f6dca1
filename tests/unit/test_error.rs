use maestro_client::error::{AppError, AuthError};

#[test]
fn test_auth_error_display_rejected() {
    let error = AuthError::Rejected {
        status: 403,
        body: "forbidden".to_string(),
    };
    assert_eq!(error.to_string(), "login rejected with status 403: forbidden");
    assert_eq!(error.status(), Some(403));
}

#[test]
fn test_auth_error_malformed_has_no_status() {
    let error = AuthError::MalformedPayload {
        body: "{}".to_string(),
    };
    assert_eq!(error.status(), None);
    assert!(error.to_string().contains("accessToken"));
}

#[test]
fn test_app_error_from_auth_error() {
    let error: AppError = AuthError::Rejected {
        status: 401,
        body: String::new(),
    }
    .into();
    assert!(error.is_authentication());
    assert!(!error.is_transport());
    assert!(!error.is_timeout());
    assert!(error.to_string().starts_with("authentication error:"));
}

#[test]
fn test_app_error_from_json_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(!error.is_authentication());
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad header".to_string());
    assert_eq!(error.to_string(), "invalid input: bad header");
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("timeout must be positive".to_string());
    assert_eq!(
        error.to_string(),
        "configuration error: timeout must be positive"
    );
}

#[test]
fn test_app_error_from_io_error() {
    let io = std::io::Error::other("disk gone");
    let error: AppError = io.into();
    assert!(matches!(error, AppError::Io(_)));
}
