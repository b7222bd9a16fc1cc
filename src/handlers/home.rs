use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::registration::state::classify;
use crate::templates::HomeTemplate;
use crate::utils::auth::require_session;
use askama::Template;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Set by the profile form redirect
    pub username: Option<String>,
}

/// Homepage
///
/// GET /
///
/// Requires a valid session; otherwise redirects to the login form. Runs
/// the registration-state classifier on the authenticated account and
/// renders the result as the page's `rating`.
pub async fn home_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HomeQuery>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    let session = require_session(&state, &headers)?;

    let user = state.accounts.get(&session.username).ok_or_else(|| {
        warn!(username = %session.username, "Session references a removed account");
        PageError::UnknownAccount
    })?;

    let rating = classify(&user.snapshot());

    debug!(username = %user.username, rating, "Classified registration state");

    let template = HomeTemplate {
        username: user.username.clone(),
        display_name: query.username,
        rating,
    };

    Ok(Html(template.render()?).into_response())
}
