use crate::domain::product::{ListQuery, Product, ProductPage, ProductPayload};
use crate::transport::http::handlers::common::invalid_body;
use crate::transport::http::types::{AppState, MessageResponse, ValidationErrorResponse};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/produtos",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered page of products", body = ProductPage)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<ProductPage> {
    // Listing never fails: an undecodable query string means "no parameters".
    let query = match pairs {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring undecodable query string");
            ListQuery::default()
        }
    };
    let catalog = state.catalog.read().await;
    Json(catalog.list(&query))
}

#[utoipa::path(
    get,
    path = "/produtos/{id}",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Id is not an integer", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    match catalog.get(&id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/produtos",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<ProductPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match request {
        Ok(v) => v,
        Err(e) => return invalid_body(e),
    };

    let mut catalog = state.catalog.write().await;
    match catalog.create(&payload) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/produtos/{id}",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid id or validation failed", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<ProductPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match request {
        Ok(v) => v,
        Err(e) => return invalid_body(e),
    };

    let mut catalog = state.catalog.write().await;
    match catalog.update(&id, &payload) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/produtos/{id}",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Id is not an integer", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut catalog = state.catalog.write().await;
    match catalog.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
