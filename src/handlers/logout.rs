use crate::core::error::found;
use crate::core::state::AppState;
use crate::utils::auth::cookie_value;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Response,
};
use std::sync::Arc;
use tracing::info;

/// Logout
///
/// GET /logout
///
/// Destroys the session if one exists, clears the cookie, and redirects to
/// the homepage (which will in turn bounce to the login form).
pub async fn logout_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(token) = cookie_value(&headers, &state.config.session.cookie_name) {
        if let Some(session) = state.sessions.remove(&token) {
            info!(username = %session.username, "Logged out");
        }
    }

    let mut response = found("/");

    let clear = format!(
        "{}=; Path=/; HttpOnly; Max-Age=0",
        state.config.session.cookie_name
    );
    if let Ok(value) = clear.parse() {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }

    response
}
