//! Request handlers

pub mod assignments;
pub mod health;
pub mod items;
pub mod participants;
pub mod receipts;
pub mod sessions;
pub mod totals;

use axum::Json;
use core_kernel::SessionId;
use domain_split::{Ledger, SplitError};
use tracing::debug;

use crate::dto::session::SessionView;
use crate::error::ApiError;
use crate::AppState;

/// Reads a session id from a path segment, with or without its `SES-` prefix
///
/// An unreadable id cannot name a live session, so it is reported as not found.
pub(crate) fn session_id(raw: &str) -> Result<SessionId, ApiError> {
    raw.parse().map_err(ApiError::from)
}

/// Applies one ledger edit and returns the resulting view
///
/// An edit that is ignored by the ledger is not an HTTP error: the view is
/// returned unchanged with the reason as its notice.
pub(crate) async fn edit_ledger(
    state: &AppState,
    id: &str,
    edit: impl FnOnce(&mut Ledger) -> Result<(), SplitError>,
) -> Result<Json<SessionView>, ApiError> {
    let session_id = session_id(id)?;
    let view = state
        .sessions
        .with_session_mut(session_id, |session| {
            let notice = edit(&mut session.ledger).err().map(|err| {
                debug!(session_id = %session_id, error = %err, "Ledger edit ignored");
                err.to_string()
            });
            SessionView::of(session).with_notice(notice)
        })
        .await?;

    Ok(Json(view))
}
