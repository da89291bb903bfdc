//! # correction-server
//!
//! REST API server for monetary correction tables and forecasts.

use correction_server::{build_router, AppState, KindRegistry, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "correction_server=info,correction_forecast=info,tower_http=info".into()
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;
    let registry = KindRegistry::from_config(&config)?;

    tracing::info!(model_dir = %config.model_dir.display(), "model store configured");
    let app = build_router(AppState::new(config, registry));

    tracing::info!(
        "correction-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
