use crate::routes;

/// Body returned by the hello endpoint.
pub const HELLO_BODY: &str = "Hello, world!";

/// GET /hello handler - Fixed plain-text greeting
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    ),
    tag = "greetings"
)]
pub async fn hello_handler() -> &'static str {
    HELLO_BODY
}
