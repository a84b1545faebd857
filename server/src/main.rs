//! Formula 1 API server.
//!
//! Run from repo root: `cargo run -p f1-api-server`

use f1_api::{build_router, AppState, ServerConfig, SqliteDataSource};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("f1_api=info,f1_api_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let source = match SqliteDataSource::open(&config.database_path, config.max_connections).await {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "cannot open database");
            return Err(e.into());
        }
    };

    let app = build_router(AppState::new(source), config.api_prefix.as_deref());
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(
        "Formula 1 API listening on http://{} (database {})",
        listener.local_addr()?,
        config.database_path.display()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
