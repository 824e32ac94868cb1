//! HTTP API layer for the recipe catalog.
//!
//! # Responsibility
//! - Map HTTP verbs and paths onto `CatalogStore` operations.
//! - Translate absence and validation failures into client-error responses.
//! - Decode bulk-import uploads and serve bulk-export downloads.
//!
//! # Invariants
//! - Every store access goes through the single `RwLock` in [`AppState`],
//!   so clear-then-load imports and read-modify-write updates never
//!   interleave.
//! - The health endpoint never touches the store.

pub mod config;
mod error;
mod handlers;
mod routes;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::create_router;

use recipe_core::CatalogStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State shared by every request handler.
///
/// The configuration is immutable and read without locking; the store sits
/// behind one `RwLock`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub store: Arc<RwLock<CatalogStore>>,
}

impl AppState {
    pub fn new(config: ApiConfig, store: CatalogStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Binds the configured address and serves until the process exits.
pub async fn run_server(config: ApiConfig, store: CatalogStore) -> std::io::Result<()> {
    let bind_addr = config.bind_addr;
    log::info!(
        "event=server_start module=api status=ok app={} version={} bind={} recipes={}",
        config.app_name,
        config.version,
        bind_addr,
        store.len()
    );

    let app = create_router(AppState::new(config, store));
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await
}
