//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed session check
//! degrades to an anonymous visitor and a failed login degrades to a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest};

pub const ME_PATH: &str = "/api/auth/me";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Join the configured API base with an endpoint path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Build the error for a non-2xx response, preferring the server's message.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
async fn read_user(resp: gloo_net::http::Response) -> Result<User, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(resp.status(), &body));
    }
    resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Fetch the current session's user from `/api/auth/me`.
///
/// `Ok(None)` means the visitor is anonymous (401).
///
/// # Errors
///
/// Transport, decode and non-401 status failures.
pub async fn fetch_current_user(base: &str) -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(base, ME_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.status() == 401 {
            return Ok(None);
        }
        read_user(resp).await.map(Some)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's error message for rejected credentials.
pub async fn login(base: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = post_json(&endpoint(base, LOGIN_PATH), &body).await?;
        read_user(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`. The new user is signed in.
///
/// # Errors
///
/// Returns the server's error message, e.g. for an email already in use.
pub async fn register(base: &str, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
        let resp = post_json(&endpoint(base, REGISTER_PATH), &body).await?;
        read_user(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Transport and non-2xx status failures.
pub async fn logout(base: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(base, LOGOUT_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}
