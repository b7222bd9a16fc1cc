use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::security::session::Session;
use crate::utils::time::current_timestamp;
use axum::http::{header, HeaderMap};
use std::sync::Arc;

/// Compare two secrets in constant time to prevent timing attacks.
///
/// Used for password and CSRF token checks so that a mismatch cannot be
/// located character by character through response timing.
pub fn constant_time_eq(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

/// Generate a random 32-byte token, hex encoded (64 characters).
pub fn generate_token() -> String {
    hex::encode(rand::random::<[u8; 32]>())
}

/// Extract a cookie value by name from the request headers.
///
/// Parses the `Cookie` header manually; values are taken verbatim up to the
/// next `;`. Returns `None` if the header or the named cookie is absent.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in raw.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Resolve the session for a request, or fail with a login redirect.
///
/// Missing cookie means the browser never logged in; a token the store no
/// longer knows (expired or evicted) reads as an expired session.
pub fn require_session(state: &AppState, headers: &HeaderMap) -> Result<Arc<Session>, PageError> {
    let token = cookie_value(headers, &state.config.session.cookie_name)
        .ok_or(PageError::NotAuthenticated)?;

    state
        .sessions
        .get(&token, current_timestamp())
        .ok_or(PageError::SessionExpired)
}
