//! Item handlers

use axum::{
    extract::{Path, State},
    Json,
};
use core_kernel::ItemId;
use validator::Validate;

use crate::dto::session::{SessionView, UpdateItemRequest};
use crate::handlers::edit_ledger;
use crate::{error::ApiError, AppState};

/// Adds a placeholder item priced at zero
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    edit_ledger(&state, &id, |ledger| {
        ledger.add_item();
        Ok(())
    })
    .await
}

/// Renames and/or reprices an item
pub async fn update_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<Json<SessionView>, ApiError> {
    request.validate()?;
    let item_id = ItemId::new(item_id);

    edit_ledger(&state, &id, |ledger| {
        ledger.update_item(&item_id, request.into()).map(|_| ())
    })
    .await
}

/// Removes an item and its assignment
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> Result<Json<SessionView>, ApiError> {
    let item_id = ItemId::new(item_id);

    edit_ledger(&state, &id, |ledger| ledger.remove_item(&item_id).map(|_| ())).await
}
