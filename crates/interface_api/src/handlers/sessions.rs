//! Session lifecycle handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain_split::{Ledger, LedgerSnapshot, SplitSummary};

use crate::dto::session::SessionView;
use crate::handlers::session_id;
use crate::{error::ApiError, AppState};

/// Starts a session from a recognition payload
///
/// The body is read as-is: malformed, non-UTF-8 or empty bodies yield an
/// empty ledger rather than an error.
pub async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let payload = std::str::from_utf8(&body).ok();
    let ledger = Ledger::from_payload(payload, &state.ledger_options);

    let view = state.sessions.create(ledger, SessionView::of).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Gets a session's ledger
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let view = state
        .sessions
        .with_session(session_id(&id)?, SessionView::of)
        .await?;
    Ok(Json(view))
}

/// Ends a session, discarding its ledger
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(session_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Per-person amounts and reconciliation against the stated total
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SplitSummary>, ApiError> {
    let summary = state
        .sessions
        .with_session(session_id(&id)?, |session| session.ledger.summary())
        .await?;
    Ok(Json(summary))
}

/// Read-only snapshot for exporting the split
pub async fn export_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LedgerSnapshot>, ApiError> {
    let snapshot = state
        .sessions
        .with_session(session_id(&id)?, |session| session.ledger.snapshot())
        .await?;
    Ok(Json(snapshot))
}
