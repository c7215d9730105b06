use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("", ME_PATH), "/api/auth/me");
    assert_eq!(endpoint("https://api.example.com", LOGIN_PATH), "https://api.example.com/api/auth/login");
    assert_eq!(endpoint("https://api.example.com/", LOGOUT_PATH), "https://api.example.com/api/auth/logout");
}

#[test]
fn status_error_prefers_server_message() {
    let err = status_error(401, r#"{"error":"invalid credentials"}"#);
    assert_eq!(err, ApiError::Status { status: 401, message: "invalid credentials".to_owned() });
    assert_eq!(err.to_string(), "invalid credentials");
}

#[test]
fn status_error_falls_back_to_status_code() {
    let err = status_error(500, "<html>oops</html>");
    assert_eq!(err.to_string(), "request failed with status 500");
}

#[test]
fn status_error_ignores_blank_message() {
    let err = status_error(409, r#"{"error":"  "}"#);
    assert_eq!(err.to_string(), "request failed with status 409");
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;

    use futures::executor::block_on;

    #[test]
    fn helpers_are_unavailable_off_browser() {
        assert_eq!(block_on(fetch_current_user("")), Err(ApiError::Unavailable));
        assert_eq!(block_on(login("", "a@b.c", "pw")), Err(ApiError::Unavailable));
        assert_eq!(block_on(register("", "A", "a@b.c", "pw")), Err(ApiError::Unavailable));
        assert_eq!(block_on(logout("")), Err(ApiError::Unavailable));
    }
}
