//! REST API helpers for communicating with the catalog server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in the
//! browser session that owns the cookie.
//!
//! ERROR HANDLING
//! ==============
//! Logout reports failures as `ApiError` so the shell can log them and still
//! sign the user out locally.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

/// Session teardown endpoint.
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Failure modes of the REST helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: &'static str, message: String },
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("not available on server")]
    Unavailable,
}

/// End the current session by calling `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns `ApiError::Transport` if the request cannot be sent,
/// `ApiError::Status` on a non-2xx response, and `ApiError::Unavailable`
/// outside the browser.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport { endpoint: LOGOUT_ENDPOINT, message: e.to_string() })?;
        if !resp.ok() {
            return Err(ApiError::Status { endpoint: LOGOUT_ENDPOINT, status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
