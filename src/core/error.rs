// Centralized error handling for page handlers

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that can occur while serving a page.
///
/// Authentication and CSRF failures bounce the browser back to the login
/// form; rendering and internal failures surface as 500s.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Session has expired")]
    SessionExpired,

    #[error("Invalid username or password")]
    BadCredentials,

    #[error("Missing CSRF token")]
    MissingCsrfToken,

    #[error("Invalid CSRF token")]
    InvalidCsrfToken,

    #[error("Account no longer exists")]
    UnknownAccount,

    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Build a 302 Found redirect.
///
/// `axum::response::Redirect` emits 303/307; the login flow relies on plain
/// 302 semantics, so responses are built by hand.
pub fn found(location: &str) -> Response {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .unwrap()
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotAuthenticated
            | PageError::SessionExpired
            | PageError::BadCredentials
            | PageError::MissingCsrfToken
            | PageError::InvalidCsrfToken
            | PageError::UnknownAccount => found("/login"),

            PageError::Template(_) | PageError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            )
                .into_response(),
        }
    }
}
