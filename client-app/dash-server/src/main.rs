use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use dash_api::{build_router, AppState};
use dash_core::repositories::FlagRepository;
use dash_infrastructure::{seed, MemoryFlagRepository, SessionSweeper, SessionWorkspaces};
use dash_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes the log file on exit
    let _log_guard = dash_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // In-memory adapters
    let flags: Arc<dyn FlagRepository> = Arc::new(MemoryFlagRepository::new());
    let workspaces = SessionWorkspaces::new(Arc::new(seed::consumer_ledger()));

    // Idle session eviction
    let sweeper = Arc::new(SessionSweeper::new(
        flags.clone(),
        workspaces.clone(),
        Duration::from_secs(config.session.idle_ttl_secs),
        Duration::from_secs(config.session.sweep_interval_secs),
    ));
    tokio::spawn(sweeper.run());

    // Create App State
    let state = match AppState::new(config.clone(), flags, workspaces) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to build application state: {}", e);
            std::process::exit(1);
        }
    };

    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
