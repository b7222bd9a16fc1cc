use crate::core::error::PageError;
use crate::utils::auth::constant_time_eq;

/// Cookie used for the pre-login double-submit token.
pub const CSRF_COOKIE: &str = "csrf_token";

/// Verify a submitted CSRF token against the expected one.
///
/// The login form uses the double-submit-cookie pattern (no session exists
/// yet); authenticated forms compare against the session's token. Both go
/// through here so the comparison is constant time in every case.
pub fn verify_csrf_token(expected: Option<&str>, submitted: &str) -> Result<(), PageError> {
    let expected = expected.ok_or(PageError::MissingCsrfToken)?;

    if submitted.is_empty() {
        return Err(PageError::MissingCsrfToken);
    }

    if !constant_time_eq(submitted, expected) {
        return Err(PageError::InvalidCsrfToken);
    }

    Ok(())
}
