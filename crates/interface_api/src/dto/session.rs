//! Session and ledger DTOs

use chrono::{DateTime, Utc};
use core_kernel::{Money, SessionId};
use domain_split::{ItemUpdate, LedgerSnapshot};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::session::Session;

/// A session's ledger as returned by every session endpoint
///
/// `notice` is set when the requested edit was ignored; the ledger shown is
/// then unchanged.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub ledger: LedgerSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl SessionView {
    pub fn of(session: &Session) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            ledger: session.ledger.snapshot(),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddParticipantRequest {
    #[validate(length(max = 64, message = "at most 64 characters"))]
    pub name: String,
}

/// Partial item edit; absent fields are left alone
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(max = 200, message = "at most 200 characters"))]
    pub name: Option<String>,
    pub price: Option<Money>,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(request: UpdateItemRequest) -> Self {
        ItemUpdate {
            name: request.name,
            price: request.price,
        }
    }
}

/// Assigns an item; a missing, null or blank participant clears it
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AssignRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "at most 64 characters"))]
    pub participant: Option<String>,
}

impl AssignRequest {
    pub fn participant(&self) -> &str {
        self.participant.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_update_request_coerces_price() {
        let request: UpdateItemRequest = serde_json::from_str(r#"{"price": "4.5"}"#).unwrap();
        let update = ItemUpdate::from(request);

        assert_eq!(update.name, None);
        assert_eq!(update.price, Some(Money::new(dec!(4.5))));
    }

    #[test]
    fn test_update_request_invalid_price_is_zero() {
        let request: UpdateItemRequest = serde_json::from_str(r#"{"price": "abc"}"#).unwrap();

        assert_eq!(request.price, Some(Money::zero()));
    }

    #[test]
    fn test_assign_request_defaults_to_clear() {
        let request: AssignRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.participant(), "");
    }

    #[test]
    fn test_participant_name_length_is_validated() {
        let request = AddParticipantRequest { name: "x".repeat(65) };

        assert!(request.validate().is_err());
    }
}
