//! API route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, HealthResponse, PredictResponse, Query};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChainOpera Agent API",
        version = "0.1.0",
        description = "Agent service with a health check and a placeholder prediction endpoint"
    ),
    tags(
        (name = "predict", description = "Prediction operations"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::predict,
    ),
    components(schemas(
        Query,
        PredictResponse,
        HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Create the API router
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    Router::new()
        // Prediction
        .route("/predict", post(handlers::predict))

        // Health
        .route("/health", get(handlers::health))

        // OpenAPI spec and Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
