use crate::domain::product::{FieldViolation, Product, ProductPage, ProductPayload};
use crate::transport::http::handlers::common::log_request;
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    AppState, HealthResponse, MessageResponse, ValidationErrorResponse,
};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        Product,
        ProductPage,
        ProductPayload,
        FieldViolation,
        MessageResponse,
        ValidationErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/produtos",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/produtos/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(app_state)
}
