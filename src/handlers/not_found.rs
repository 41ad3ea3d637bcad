use axum::http::StatusCode;

/// Fallback handler for requests that match no registered route.
pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}
