//! The three independent pricing records a product can carry.
//!
//! All price arithmetic the backend performs on these stays server-side;
//! the helpers here only answer display questions an administrator asks
//! while editing (which tier applies, is a special price live).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Base price plus optional discount, keyed by product and optional variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    pub product_id: Uuid,
    #[serde(default)]
    pub variant_id: Option<Uuid>,
    pub base_price: Decimal,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    pub discount_value: Option<Decimal>,
    /// ISO 4217 code, e.g. `"USD"`.
    pub currency: String,
}

/// One quantity breakpoint of a tier pricing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBreak {
    pub min_quantity: u32,
    pub price: Decimal,
}

/// Quantity-break pricing: the applicable price is the breakpoint with the
/// largest `min_quantity` not exceeding the purchased quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPricing {
    pub product_id: Uuid,
    #[serde(default)]
    pub variant_id: Option<Uuid>,
    pub tiers: Vec<TierBreak>,
}

impl TierPricing {
    /// Price for `quantity`, or `None` when no breakpoint is low enough.
    #[must_use]
    pub fn price_for_quantity(&self, quantity: u32) -> Option<Decimal> {
        self.tiers
            .iter()
            .filter(|tier| tier.min_quantity <= quantity)
            .max_by_key(|tier| tier.min_quantity)
            .map(|tier| tier.price)
    }
}

/// Time-bounded override price, distinct from the base price/discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPricing {
    pub product_id: Uuid,
    #[serde(default)]
    pub variant_id: Option<Uuid>,
    pub price: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl SpecialPricing {
    /// Whether the override applies at `instant` (inclusive start,
    /// exclusive end).
    #[must_use]
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.starts_at <= instant && instant < self.ends_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tier_pricing(tiers: Vec<(u32, i64)>) -> TierPricing {
        TierPricing {
            product_id: Uuid::nil(),
            variant_id: None,
            tiers: tiers
                .into_iter()
                .map(|(min_quantity, price)| TierBreak {
                    min_quantity,
                    price: Decimal::from(price),
                })
                .collect(),
        }
    }

    #[test]
    fn tier_lookup_picks_largest_applicable_breakpoint() {
        let pricing = tier_pricing(vec![(1, 10), (10, 8), (50, 6)]);
        assert_eq!(pricing.price_for_quantity(25), Some(Decimal::from(8)));
        assert_eq!(pricing.price_for_quantity(50), Some(Decimal::from(6)));
    }

    #[test]
    fn tier_lookup_below_first_breakpoint_is_none() {
        let pricing = tier_pricing(vec![(5, 10)]);
        assert_eq!(pricing.price_for_quantity(4), None);
    }

    #[test]
    fn tier_lookup_ignores_declaration_order() {
        let pricing = tier_pricing(vec![(50, 6), (1, 10), (10, 8)]);
        assert_eq!(pricing.price_for_quantity(12), Some(Decimal::from(8)));
    }

    #[test]
    fn special_price_window_is_start_inclusive_end_exclusive() {
        let pricing = SpecialPricing {
            product_id: Uuid::nil(),
            variant_id: None,
            price: Decimal::from(7),
            starts_at: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2026, 3, 8, 0, 0, 0).unwrap(),
        };
        assert!(pricing.is_active_at(pricing.starts_at));
        assert!(pricing.is_active_at(Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap()));
        assert!(!pricing.is_active_at(pricing.ends_at));
    }
}
