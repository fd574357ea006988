//! Stated totals handler

use axum::{
    extract::{Path, State},
    Json,
};
use domain_split::TotalsPatch;

use crate::dto::session::SessionView;
use crate::handlers::edit_ledger;
use crate::{error::ApiError, AppState};

/// Overwrites whichever of subtotal, tax and total are present
pub async fn update_totals(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TotalsPatch>,
) -> Result<Json<SessionView>, ApiError> {
    edit_ledger(&state, &id, |ledger| {
        ledger.set_totals(patch);
        Ok(())
    })
    .await
}
