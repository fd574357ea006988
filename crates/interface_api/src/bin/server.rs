//! Bill Split - API Server Binary
//!
//! This binary starts the HTTP API server that hosts bill split sessions.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin billsplit-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_DEFAULT_PARTICIPANTS="Ali,Sara" cargo run --bin billsplit-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LOG_JSON` - Emit JSON log lines (default: false)
//! * `API_SESSION_TTL_SECS` - Idle time before a session is dropped (default: 3600)
//! * `API_MAX_SESSIONS` - Most sessions held at once (default: 10000)
//! * `API_DEFAULT_PARTICIPANTS` - Comma-separated names every ledger starts with (default: none)

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use interface_api::{config::ApiConfig, router_with_state, session::SessionStore, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How often idle sessions are swept
const PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if the configured address is invalid or the server
/// fails to bind to it.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level, config.log_json);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        session_ttl_secs = config.session_ttl_secs,
        max_sessions = config.max_sessions,
        "Starting Bill Split API Server"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let state = AppState::new(config);
    tokio::spawn(purge_idle_sessions(state.sessions.clone()));

    let app = router_with_state(state);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to defaults when the environment cannot be read.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|err| {
        eprintln!("Invalid API_* configuration ({err}), using defaults");
        ApiConfig::default()
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Sweeps idle sessions on a fixed interval
async fn purge_idle_sessions(sessions: SessionStore) {
    let mut interval = tokio::time::interval(PURGE_INTERVAL);
    loop {
        interval.tick().await;
        let purged = sessions.purge_expired().await;
        if purged > 0 {
            tracing::info!(purged, "Idle sessions purged");
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
