//! HTTP API Layer
//!
//! This crate hosts bill split ledgers over REST using Axum. Each session
//! holds one ledger in memory, seeded from a receipt recognition payload.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for sessions, items, participants,
//!   assignments, totals and receipt parsing
//! - **Session store**: In-memory ledgers with idle expiry
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod session;

use std::time::Duration;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use domain_split::LedgerOptions;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{assignments, health, items, participants, receipts, sessions, totals};
use crate::middleware::{request_log_middleware, REQUEST_ID_HEADER};
use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub ledger_options: LedgerOptions,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds state with an empty session store sized from `config`
    pub fn new(config: ApiConfig) -> Self {
        let sessions = SessionStore::new(
            Duration::from_secs(config.session_ttl_secs),
            config.max_sessions,
        );
        Self {
            sessions,
            ledger_options: config.ledger_options(),
            config,
        }
    }
}

/// Creates the main API router with a fresh session store
pub fn create_router(config: ApiConfig) -> Router {
    router_with_state(AppState::new(config))
}

/// Creates the main API router around existing state
///
/// Lets the caller keep a handle on the session store, e.g. for purging.
pub fn router_with_state(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Session routes
    let session_routes = Router::new()
        .route("/", post(sessions::create_session))
        .route("/:id", get(sessions::get_session))
        .route("/:id", delete(sessions::delete_session))
        .route("/:id/summary", get(sessions::get_summary))
        .route("/:id/export", get(sessions::export_session))
        .route("/:id/items", post(items::add_item))
        .route("/:id/items/:item_id", patch(items::update_item))
        .route("/:id/items/:item_id", delete(items::remove_item))
        .route("/:id/participants", post(participants::add_participant))
        .route("/:id/participants/:name", delete(participants::remove_participant))
        .route("/:id/assignments/:item_id", put(assignments::assign_item))
        .route("/:id/totals", patch(totals::update_totals));

    // Receipt routes
    let receipt_routes = Router::new().route("/parse", post(receipts::parse_receipt));

    let api_routes = Router::new()
        .nest("/sessions", session_routes)
        .nest("/receipts", receipt_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
