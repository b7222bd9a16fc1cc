use crate::core::error::{found, PageError};
use crate::core::state::AppState;
use crate::security::csrf::{verify_csrf_token, CSRF_COOKIE};
use crate::templates::LoginTemplate;
use crate::utils::auth::{constant_time_eq, cookie_value, generate_token};
use crate::utils::time::current_timestamp;
use askama::Template;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Response,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Login form
///
/// GET /login
///
/// Always renders the form, authenticated or not. The CSRF token is issued
/// as both a cookie and a hidden field (double-submit) since no session
/// exists before login.
pub async fn login_form_handler() -> Result<Response, PageError> {
    let csrf_token = generate_token();

    let html = LoginTemplate {
        csrf_token: csrf_token.clone(),
    }
    .render()?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(
            header::SET_COOKIE,
            format!("{CSRF_COOKIE}={csrf_token}; Path=/; HttpOnly; SameSite=Lax"),
        )
        .body(html.into())
        .unwrap())
}

/// Login form submission
///
/// POST /login
///
/// Any failure (CSRF mismatch, unknown account, passwordless account, wrong
/// password) bounces back to the login form with 302. Success creates a
/// session, sets the session cookie, and redirects to the homepage.
pub async fn login_submit_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    let cookie_token = cookie_value(&headers, CSRF_COOKIE);
    verify_csrf_token(cookie_token.as_deref(), &form.csrf_token).map_err(|e| {
        warn!(username = %form.username, "Login rejected: CSRF check failed");
        e
    })?;

    let user = state.accounts.get(&form.username).ok_or_else(|| {
        warn!(username = %form.username, "Login attempt for unknown account");
        PageError::BadCredentials
    })?;

    // Accounts without a password cannot authenticate through the form
    let stored = user.password.as_deref().unwrap_or("");
    if stored.is_empty() || !constant_time_eq(&form.password, stored) {
        warn!(username = %form.username, "Login attempt with wrong password");
        return Err(PageError::BadCredentials);
    }

    let session = state.sessions.create(&user.username, current_timestamp());

    info!(username = %user.username, "Login successful");

    let mut response = found("/");
    response.headers_mut().insert(
        header::SET_COOKIE,
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            state.config.session.cookie_name, session.token
        )
        .parse()
        .map_err(anyhow::Error::from)?,
    );

    Ok(response)
}
