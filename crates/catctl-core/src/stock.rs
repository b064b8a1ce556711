//! Stock movement log records. Append-only on the client: entries are
//! created and listed, never edited or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    In,
    Out,
}

/// A persisted stock movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLog {
    pub id: Uuid,
    pub product_id: Uuid,
    #[serde(default)]
    pub variant_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub movement: MovementType,
    pub quantity: u32,
    /// Where the movement came from, e.g. `"purchase"`, `"return"`, `"manual"`.
    pub source: String,
    #[serde(default)]
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Payload for recording a new movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLogDraft {
    pub product_id: Uuid,
    #[serde(default)]
    pub variant_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub movement: MovementType,
    pub quantity: u32,
    pub source: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl StockLogDraft {
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroQuantity`] for a zero quantity and
    /// [`ValidationError::MissingField`] for a blank source.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        if self.source.trim().is_empty() {
            return Err(ValidationError::MissingField("source"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> StockLogDraft {
        StockLogDraft {
            product_id: Uuid::nil(),
            variant_id: None,
            movement: MovementType::In,
            quantity: 5,
            source: "purchase".to_string(),
            note: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut d = draft();
        d.quantity = 0;
        assert!(matches!(d.validate(), Err(ValidationError::ZeroQuantity)));
    }

    #[test]
    fn movement_type_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&MovementType::Out).expect("serialize"),
            "\"out\""
        );
    }

    #[test]
    fn wire_field_is_named_type() {
        let json = serde_json::to_value(draft()).expect("serialize");
        assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("in"));
    }
}
