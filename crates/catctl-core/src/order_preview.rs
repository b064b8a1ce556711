//! Quick-preview order math for the manual order form.
//!
//! The backend's `/api/pricing/resolve` endpoint is the authoritative price
//! path; this module only recomputes the running totals an administrator
//! sees while drafting an order. It is pure and stateless so the two paths
//! cannot be confused in tests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a draft order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub price: Decimal,
    pub quantity: u32,
}

/// A coupon as entered in the order form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Coupon {
    Percentage(Decimal),
    Fixed(Decimal),
}

impl Coupon {
    /// Discount this coupon yields against `subtotal`.
    ///
    /// Percentage coupons take `subtotal * value / 100`; fixed coupons are
    /// capped at the subtotal so they can never push the total negative on
    /// their own.
    #[must_use]
    pub fn discount(&self, subtotal: Decimal) -> Decimal {
        match self {
            Coupon::Percentage(value) => subtotal * *value / Decimal::ONE_HUNDRED,
            Coupon::Fixed(value) => (*value).min(subtotal),
        }
    }
}

/// Computed totals for a draft order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub grand_total: Decimal,
}

/// Sum of `price * quantity` over the line items.
#[must_use]
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum()
}

/// Recomputes the preview totals from the current form fields.
///
/// `grand_total = max(0, subtotal - discount + shipping + tax)`. The floor
/// at zero mirrors the form: over-discounting shows a free order, never a
/// negative one.
#[must_use]
pub fn preview(
    items: &[LineItem],
    discount: Decimal,
    shipping: Decimal,
    tax: Decimal,
) -> OrderTotals {
    let subtotal = subtotal(items);
    let grand_total = (subtotal - discount + shipping + tax).max(Decimal::ZERO);
    OrderTotals {
        subtotal,
        discount,
        shipping,
        tax,
        grand_total,
    }
}
