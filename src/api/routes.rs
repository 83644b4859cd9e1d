//! Route definitions for the API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::config::CorsConfig;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::root, handlers::predict),
    components(schemas(
        crate::api::types::RootResponse,
        crate::api::types::PredictionRequest,
        crate::api::types::PredictionResponse,
        crate::domain::Label,
    )),
    tags(
        (name = "predict", description = "Answering machine detection"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "AMD Service API",
        version = "0.1.0",
        description = "Answering machine detection - classifies call audio as human or machine",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(cors_config: &CorsConfig) -> Router {
    let cors = if cors_config.allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(handlers::root))
        .route("/predict", post(handlers::predict))
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
