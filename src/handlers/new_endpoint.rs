use crate::routes;

/// Body returned by the newEndpoint endpoint.
pub const NEW_ENDPOINT_BODY: &str = "This is a new endpoint.";

/// GET /newEndpoint handler - Fixed plain-text message
#[utoipa::path(
    get,
    path = routes::NEW_ENDPOINT,
    responses(
        (status = 200, description = "Fixed message", body = String, content_type = "text/plain")
    ),
    tag = "greetings"
)]
pub async fn new_endpoint_handler() -> &'static str {
    NEW_ENDPOINT_BODY
}
