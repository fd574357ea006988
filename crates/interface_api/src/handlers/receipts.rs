//! Receipt parsing handler

use axum::Json;
use domain_receipt::parse_receipt_lines;
use domain_split::SeedReceipt;
use tracing::info;
use validator::Validate;

use crate::dto::receipt::ParseReceiptRequest;
use crate::error::ApiError;

/// Turns recognised receipt text into a seed payload
///
/// The response body can be posted unchanged to create a session.
pub async fn parse_receipt(
    Json(request): Json<ParseReceiptRequest>,
) -> Result<Json<SeedReceipt>, ApiError> {
    request.validate()?;

    let lines = request
        .into_lines()
        .ok_or_else(|| ApiError::BadRequest("Expected one of fragments, lines or text".to_string()))?;
    let receipt = parse_receipt_lines(&lines);

    info!(lines = lines.len(), items = receipt.items.len(), "Receipt parsed");
    Ok(Json(receipt))
}
