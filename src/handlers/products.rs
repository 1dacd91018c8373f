use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::Product,
    AppState,
};

/// Path ids must parse as an integer and be at least 1.
fn parse_product_id(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::InvalidProductId(raw.to_string())),
    }
}

/// Bodies are decoded regardless of `Content-Type`.
fn decode_product(body: &Bytes) -> AppResult<Product> {
    Ok(serde_json::from_slice(body)?)
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.products.read().await.all().to_vec();
    debug!(count = products.len(), "Listed products");
    Json(products)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_product_id(&raw_id)?;
    let product = state
        .products
        .read()
        .await
        .find(id)
        .cloned()
        .ok_or(AppError::ProductNotFound(id))?;

    debug!(id, "Fetched product");
    Ok(Json(product))
}

/// `GET /product/create` hits the static create route instead of `/product/:id`;
/// "create" is still just an id that fails to parse.
pub async fn get_product_create() -> AppError {
    AppError::InvalidProductId("create".to_string())
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(State(state): State<AppState>, body: Bytes) -> AppResult<StatusCode> {
    let product = decode_product(&body)?;
    let id = product.product_id;

    let mut products = state.products.write().await;
    products.insert(product);

    info!(id, count = products.len(), "Created product");
    Ok(StatusCode::OK)
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let id = parse_product_id(&raw_id)?;
    let product = decode_product(&body)?;
    let new_id = product.product_id;

    if !state.products.write().await.replace(id, product) {
        return Err(AppError::ProductNotFound(id));
    }

    info!(id, new_id, "Updated product");
    Ok(StatusCode::OK)
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_product_id(&raw_id)?;

    let mut products = state.products.write().await;
    let removed = products.remove(id).ok_or(AppError::ProductNotFound(id))?;

    info!(id, name = %removed.product_name, count = products.len(), "Deleted product");
    Ok(StatusCode::OK)
}
