use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantStatus {
    Active,
    Inactive,
}

/// One `{attribute, value}` pair of a variant, e.g. `Size = "M"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub attribute: String,
    pub value: String,
}

/// A purchasable configuration of a product, persisted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: Uuid,
    pub product_id: Uuid,
    pub sku: String,
    /// Ordered as selected at generation time.
    pub options: Vec<VariantOption>,
    pub price: Decimal,
    #[serde(default)]
    pub compare_at_price: Option<Decimal>,
    pub stock: i64,
    #[serde(default)]
    pub barcode: Option<String>,
    pub status: VariantStatus,
}

/// A generated, not-yet-persisted variant.
///
/// `temp_id` is a client-only correlation token used to key edits until the
/// backend assigns a real id; it is never sent to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDraft {
    #[serde(skip_serializing, default)]
    pub temp_id: String,
    pub sku: String,
    pub options: Vec<VariantOption>,
    pub price: Decimal,
    pub compare_at_price: Decimal,
    pub stock: i64,
    pub barcode: String,
    pub status: VariantStatus,
}
