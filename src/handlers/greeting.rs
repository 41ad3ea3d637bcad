use crate::routes;

/// Body returned by the greeting endpoint. Same text as `/hello`, served
/// by a separate handler.
pub const GREETING_BODY: &str = "Hello, world!";

/// GET /greeting handler - Fixed plain-text greeting
#[utoipa::path(
    get,
    path = routes::GREETING,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    ),
    tag = "greetings"
)]
pub async fn greeting_handler() -> &'static str {
    GREETING_BODY
}
