//! Auth routes — session teardown for the catalog header's logout control.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "apimlAuthenticationToken";

/// Cookie that overwrites and immediately expires the session cookie.
pub(crate) fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// `POST /api/auth/logout` — clear the session cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if jar.get(COOKIE_NAME).is_some() {
        tracing::info!("session cookie cleared");
    } else {
        tracing::debug!("logout without session cookie");
    }

    let jar = jar.add(expired_session_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}
