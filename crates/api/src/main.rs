//! HeadWatch server binary entrypoint.
//!
//! One process hosts both halves: the background block poller writing into the
//! shared [`ChainState`], and the HTTP façade reading from it.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use headwatch_common::config::AppConfig;
use headwatch_common::state::ChainState;
use headwatch_tracker::poller::BlockPoller;
use headwatch_tracker::rpc::RpcClient;

use headwatch_api::routes::create_router;
use headwatch_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("headwatch_api=debug,headwatch_tracker=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting HeadWatch server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // The one shared state instance, owned here and passed by reference
    // everywhere else.
    let chain = Arc::new(ChainState::new());

    // Spawn the block poller task
    let client = RpcClient::new(
        config.eth_rpc_url.clone(),
        Duration::from_secs(config.rpc_timeout_secs),
    )?;
    let poller = BlockPoller::new(
        client,
        Duration::from_millis(config.poll_interval_ms),
        Arc::clone(&chain),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    let poller_handle = tokio::spawn(poller.run(shutdown_rx));
    tracing::info!(rpc_url = %config.eth_rpc_url, "Block poller task spawned");

    // Build router
    let app = create_router(AppState::new(chain))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    // Server is down; stop the poller and wait for it to finish its cycle.
    tracing::info!("Received shutdown signal, stopping poller...");
    let _ = shutdown_tx.send(());
    poller_handle.await?;

    tracing::info!("HeadWatch stopped.");
    Ok(())
}
