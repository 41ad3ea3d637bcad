use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "greeting-service API",
        version = "1.0.0",
        description = "Fixed plain-text greetings served over HTTP"
    ),
    paths(
        handlers::hello::hello_handler,
        handlers::new_endpoint::new_endpoint_handler,
        handlers::greeting::greeting_handler
    ),
    tags(
        (name = "greetings", description = "Fixed greeting endpoints")
    )
)]
pub struct ApiDoc;
