//! Assignment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use core_kernel::ItemId;
use validator::Validate;

use crate::dto::session::{AssignRequest, SessionView};
use crate::handlers::edit_ledger;
use crate::{error::ApiError, AppState};

/// Assigns an item to a participant, or clears it when none is given
pub async fn assign_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(request): Json<AssignRequest>,
) -> Result<Json<SessionView>, ApiError> {
    request.validate()?;
    let item_id = ItemId::new(item_id);

    edit_ledger(&state, &id, |ledger| ledger.assign(&item_id, request.participant())).await
}
