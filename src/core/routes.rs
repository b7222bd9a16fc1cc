// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages behind authentication
        .route("/", get(crate::handlers::home::home_handler))
        .route(
            "/profile",
            get(crate::handlers::profile::profile_form_handler)
                .post(crate::handlers::profile::profile_submit_handler),
        )

        // Authentication
        .route(
            "/login",
            get(crate::handlers::login::login_form_handler)
                .post(crate::handlers::login::login_submit_handler),
        )
        .route("/logout", get(crate::handlers::logout::logout_handler))

        // Liveness
        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
