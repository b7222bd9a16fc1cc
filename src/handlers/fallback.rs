use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

/// 404 handler for unmatched routes.
pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "Unmatched route");

    (
        StatusCode::NOT_FOUND,
        Html("<h1>Page not found</h1><p><a href=\"/\">Back to the homepage</a></p>"),
    )
        .into_response()
}
