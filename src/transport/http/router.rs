use crate::domain::catalog::{Product, WarehouseDistance};
use crate::transport::http::handlers::{health, product, warehouse};
use crate::transport::http::types::{AppState, DistanceResponse, HealthResponse, ProductResponse};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const SWAGGER_UI_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "1.0.0",
        description = "Backend API for products"
    ),
    servers((url = "http://localhost:8080/")),
    paths(
        health::healthcheck_handler,
        product::get_product_handler,
        warehouse::get_distance_handler
    ),
    components(schemas(
        Product,
        WarehouseDistance,
        ProductResponse,
        DistanceResponse,
        HealthResponse
    )),
    tags(
        (name = "Product", description = "Product lookup by id"),
        (name = "Warehouse", description = "Delivery distance by postal code")
    )
)]
pub struct ApiDoc;

/// Route table only; see [`build_app`] for docs and middleware.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/product/:id", get(product::get_product_handler))
        .route("/warehouse/distance", get(warehouse::get_distance_handler))
        .with_state(app_state)
}

/// Full application: routes, Swagger UI, request tracing and a permissive CORS policy.
pub fn build_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    create_router(app_state)
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}
