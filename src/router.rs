use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;

/// Build the application router: one route per greeting path, the OpenAPI
/// UI mount, and a fallback for everything else.
///
/// Handlers are stateless, so the router carries no shared state. Requests
/// that hit a known path with a method other than GET get a 405 with an
/// `Allow` header from the method router.
pub fn app() -> Router {
    Router::new()
        .route(routes::HELLO, get(handlers::hello_handler))
        .route(routes::NEW_ENDPOINT, get(handlers::new_endpoint_handler))
        .route(routes::GREETING, get(handlers::greeting_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
}
