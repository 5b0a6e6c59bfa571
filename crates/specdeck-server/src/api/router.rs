//! Axum router configuration.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{docs, health};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Create the API router with all routes.
pub fn create_router(pool: PgPool) -> Router {
    let state = AppState { pool };

    Router::new()
        // Documents
        .route("/docs", post(docs::upload_doc))
        .route("/docs", get(docs::list_docs))
        .route("/docs/{id}", get(docs::get_doc))
        .route("/docs/{id}", delete(docs::delete_doc))
        .route("/docs/{id}/openapi", get(docs::get_normalized_doc))
        // Rendered documentation
        .route("/reference", get(docs::reference_page))
        // Health
        .route("/health", get(health::health_check))
        // Middleware
        .layer(DefaultBodyLimit::max(docs::MAX_UPLOAD_BYTES + 16 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
