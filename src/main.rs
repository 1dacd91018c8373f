use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state — cheap to clone (the store sits behind an Arc).
///
/// Reads take the lock shared; create, update and delete hold it exclusively
/// for the whole scan-and-mutate.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<RwLock<ProductStore>>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            products: Arc::new(RwLock::new(store)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ProductStore::seeded())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,product_registry=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState::seeded();
    info!(
        count = state.products.read().await.len(),
        "Product store seeded"
    );

    let app = build_router(state);

    let addr = config.bind_addr();
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route("/product", get(handlers::products::list_products))
        .route(
            "/product/create",
            post(handlers::products::create_product)
                .get(handlers::products::get_product_create),
        )
        .route("/product/:id", get(handlers::products::get_product))
        .route(
            "/product/update/:id",
            put(handlers::products::update_product),
        )
        .route(
            "/product/delete/:id",
            delete(handlers::products::delete_product),
        )

        // ── Inventory ───────────────────────────────────────────────────────
        .route(
            "/inventory/update/:id/:quantity",
            put(handlers::inventory::update_inventory),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
