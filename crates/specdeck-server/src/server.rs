//! HTTP server bootstrap.

use std::net::SocketAddr;

use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::api::create_router;

/// Server configuration.
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub pool: PgPool,
}

/// Run the documentation portal server.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config.pool);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("specdeck listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
