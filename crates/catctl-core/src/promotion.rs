//! Combo offers and flash sales.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Inactive,
}

/// One bundled product of a combo offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboItem {
    pub product_id: Uuid,
    #[serde(default)]
    pub variant_id: Option<Uuid>,
    pub quantity: u32,
}

/// A bundle of products sold together at a fixed combined price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOffer {
    pub id: Uuid,
    pub title: String,
    pub items: Vec<ComboItem>,
    pub combined_price: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: OfferStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboDraft {
    pub title: String,
    pub items: Vec<ComboItem>,
    pub combined_price: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl ComboDraft {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty title, an empty item
    /// list, a zero-quantity item, or an inverted validity window.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.items.is_empty() {
            return Err(ValidationError::EmptyList("items"));
        }
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(ValidationError::ZeroQuantity);
        }
        validate_window(self.starts_at, self.ends_at)
    }
}

/// One discounted product of a flash sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSaleItem {
    pub product_id: Uuid,
    #[serde(default)]
    pub variant_id: Option<Uuid>,
    pub flash_price: Decimal,
    /// Units sellable at the flash price before the sale closes for the item.
    pub stock_limit: u32,
}

/// A time-bounded promotional price with a stock cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSale {
    pub id: Uuid,
    pub title: String,
    pub items: Vec<FlashSaleItem>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: OfferStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashSaleDraft {
    pub title: String,
    pub items: Vec<FlashSaleItem>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl FlashSaleDraft {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty title, an empty item
    /// list, or an inverted validity window.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.items.is_empty() {
            return Err(ValidationError::EmptyList("items"));
        }
        validate_window(self.starts_at, self.ends_at)
    }
}

fn validate_window(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<(), ValidationError> {
    if starts_at < ends_at {
        Ok(())
    } else {
        Err(ValidationError::InvalidWindow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, 8, 0, 0, 0).unwrap(),
        )
    }

    fn combo_draft() -> ComboDraft {
        let (starts_at, ends_at) = window();
        ComboDraft {
            title: "Summer Bundle".to_string(),
            items: vec![ComboItem {
                product_id: Uuid::nil(),
                variant_id: None,
                quantity: 2,
            }],
            combined_price: Decimal::from(30),
            starts_at,
            ends_at,
        }
    }

    #[test]
    fn valid_combo_draft_passes() {
        assert!(combo_draft().validate().is_ok());
    }

    #[test]
    fn combo_without_items_is_rejected() {
        let mut draft = combo_draft();
        draft.items.clear();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::EmptyList("items"))
        ));
    }

    #[test]
    fn combo_with_zero_quantity_item_is_rejected() {
        let mut draft = combo_draft();
        draft.items[0].quantity = 0;
        assert!(matches!(draft.validate(), Err(ValidationError::ZeroQuantity)));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let mut draft = combo_draft();
        std::mem::swap(&mut draft.starts_at, &mut draft.ends_at);
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidWindow)
        ));
    }

    #[test]
    fn flash_sale_draft_requires_title() {
        let (starts_at, ends_at) = window();
        let draft = FlashSaleDraft {
            title: String::new(),
            items: vec![FlashSaleItem {
                product_id: Uuid::nil(),
                variant_id: None,
                flash_price: Decimal::from(5),
                stock_limit: 100,
            }],
            starts_at,
            ends_at,
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::MissingField("title"))
        ));
    }
}
