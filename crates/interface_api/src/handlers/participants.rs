//! Participant handlers

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::dto::session::{AddParticipantRequest, SessionView};
use crate::handlers::edit_ledger;
use crate::{error::ApiError, AppState};

/// Adds a participant; blank or duplicate names are ignored with a notice
pub async fn add_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddParticipantRequest>,
) -> Result<Json<SessionView>, ApiError> {
    request.validate()?;

    edit_ledger(&state, &id, |ledger| ledger.add_participant(&request.name).map(|_| ())).await
}

/// Removes a participant and clears everything assigned to them
///
/// Removing someone who is not a participant changes nothing.
pub async fn remove_participant(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> Result<Json<SessionView>, ApiError> {
    edit_ledger(&state, &id, |ledger| {
        ledger.remove_participant(&name);
        Ok(())
    })
    .await
}
