use crate::core::error::{found, PageError};
use crate::core::state::AppState;
use crate::security::csrf::verify_csrf_token;
use crate::templates::ProfileTemplate;
use crate::utils::auth::require_session;
use crate::validation::profile::validate_username;
use askama::Template;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Profile form
///
/// GET /profile
///
/// Requires a session. The form carries the session's CSRF token.
pub async fn profile_form_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    let session = require_session(&state, &headers)?;

    let template = ProfileTemplate {
        csrf_token: session.csrf_token.clone(),
        username: String::new(),
        errors: vec![],
    };

    Ok(Html(template.render()?).into_response())
}

/// Profile form submission
///
/// POST /profile
///
/// A valid username redirects to the homepage with the new value in the
/// query string; an invalid one re-renders the form with error messages
/// and the submitted value.
pub async fn profile_submit_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<ProfileForm>,
) -> Result<Response, PageError> {
    let session = require_session(&state, &headers)?;

    verify_csrf_token(Some(&session.csrf_token), &form.csrf_token).map_err(|e| {
        warn!(username = %session.username, "Profile update rejected: CSRF check failed");
        e
    })?;

    match validate_username(&form.username) {
        Ok(username) => {
            info!(
                username = %session.username,
                new_username = %username,
                "Profile form accepted"
            );

            let query = serde_urlencoded::to_string([("username", username.as_str())])
                .map_err(anyhow::Error::from)?;

            Ok(found(&format!("/?{query}")))
        }
        Err(err) => {
            info!(
                username = %session.username,
                error = %err,
                "Profile form validation failed"
            );

            let template = ProfileTemplate {
                csrf_token: session.csrf_token.clone(),
                username: form.username,
                errors: vec![err.to_string()],
            };

            Ok(Html(template.render()?).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AccountConfig, Config, LoggingConfig, ServerConfig, SessionConfig};
    use crate::security::session::Session;
    use crate::utils::time::current_timestamp;
    use axum::body::Body;
    use axum::http::{header, HeaderValue, StatusCode};
    use http_body_util::BodyExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config {
            server: ServerConfig {
                port: 8080,
                bind_address: "127.0.0.1".to_string(),
                num_threads: 1,
            },
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
            accounts: vec![AccountConfig {
                username: "john_admin".to_string(),
                password: Some("test".to_string()),
                roles: vec!["ROLE_ADMIN".to_string()],
            }],
        }))
    }

    fn logged_in(state: &AppState) -> (Arc<Session>, HeaderMap) {
        let session = state.sessions.create("john_admin", current_timestamp());
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("portal_session={}", session.token)).unwrap(),
        );
        (session, headers)
    }

    async fn body_text(response: Response) -> String {
        let body = Body::new(response.into_body());
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_profile_form_requires_auth() {
        let state = test_state();

        let response = profile_form_handler(State(state), HeaderMap::new())
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn test_profile_form_renders_with_csrf_token() {
        let state = test_state();
        let (session, headers) = logged_in(&state);

        let response = profile_form_handler(State(state), headers).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Profile page"));
        assert!(body.contains(&session.csrf_token));
        assert!(body.contains("Save"));
    }

    #[tokio::test]
    async fn test_profile_submit_valid_redirects_home() {
        let state = test_state();
        let (session, headers) = logged_in(&state);

        let response = profile_submit_handler(
            State(state),
            headers,
            Form(ProfileForm {
                username: "test1".to_string(),
                csrf_token: session.csrf_token.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/?username=test1"
        );
    }

    #[tokio::test]
    async fn test_profile_submit_too_short_rerenders_form() {
        let state = test_state();
        let (session, headers) = logged_in(&state);

        let response = profile_submit_handler(
            State(state),
            headers,
            Form(ProfileForm {
                username: "t".to_string(),
                csrf_token: session.csrf_token.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Profile page"));
        assert!(body.contains("too short"));
        assert!(body.contains("value=\"t\""));
    }

    #[tokio::test]
    async fn test_profile_submit_blank_rerenders_form() {
        let state = test_state();
        let (session, headers) = logged_in(&state);

        let response = profile_submit_handler(
            State(state),
            headers,
            Form(ProfileForm {
                username: String::new(),
                csrf_token: session.csrf_token.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("should not be blank"));
    }

    #[tokio::test]
    async fn test_profile_submit_wrong_csrf_rejected() {
        let state = test_state();
        let (_, headers) = logged_in(&state);

        let result = profile_submit_handler(
            State(state),
            headers,
            Form(ProfileForm {
                username: "test1".to_string(),
                csrf_token: "forged".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(PageError::InvalidCsrfToken)));
    }
}
