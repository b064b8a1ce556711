use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ValidationError;

/// Whether a product is sold as a single SKU or through generated variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Variant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Published,
    Draft,
}

/// Shipping details attached to a product. `estimated_delivery` is
/// free-form display text, e.g. `"3-5 business days"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    pub shipping_class: Option<String>,
    pub cost: Option<Decimal>,
    pub estimated_delivery: Option<String>,
}

/// A catalog product as returned by the backend.
///
/// Image fields are opaque reference strings; upload mechanics are the
/// backend's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub brand_id: Option<Uuid>,
    /// Ordered; the first entry is the primary category.
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub status: ProductStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
    #[serde(default)]
    pub shipping: Option<Shipping>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// Create/update payload for a product. No id; the backend assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    pub slug: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub brand_id: Option<Uuid>,
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub status: ProductStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
    #[serde(default)]
    pub shipping: Option<Shipping>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl ProductDraft {
    /// Required-field checks performed before submission.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty title, slug,
    /// or SKU, and [`ValidationError::EmptyList`] when no category is
    /// selected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.slug.trim().is_empty() {
            return Err(ValidationError::MissingField("slug"));
        }
        if self.sku.trim().is_empty() {
            return Err(ValidationError::MissingField("sku"));
        }
        if self.category_ids.is_empty() {
            return Err(ValidationError::EmptyList("categoryIds"));
        }
        Ok(())
    }
}

/// Lookup record for a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Lookup record for a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> ProductDraft {
        ProductDraft {
            title: "Linen Shirt".to_string(),
            slug: "linen-shirt".to_string(),
            sku: "LNS".to_string(),
            description: None,
            product_type: ProductType::Variant,
            brand_id: None,
            category_ids: vec!["12".to_string()],
            status: ProductStatus::Draft,
            is_featured: false,
            tag_ids: vec![],
            shipping: None,
            thumbnail: None,
            gallery: vec![],
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(make_draft().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut draft = make_draft();
        draft.title = "   ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::MissingField("title"))
        ));
    }

    #[test]
    fn empty_sku_is_rejected() {
        let mut draft = make_draft();
        draft.sku = String::new();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::MissingField("sku"))
        ));
    }

    #[test]
    fn draft_without_categories_is_rejected() {
        let mut draft = make_draft();
        draft.category_ids.clear();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::EmptyList("categoryIds"))
        ));
    }

    #[test]
    fn product_type_serializes_lowercase() {
        let json = serde_json::to_string(&ProductType::Variant).expect("serialize");
        assert_eq!(json, "\"variant\"");
    }

    #[test]
    fn product_deserializes_with_wire_field_names() {
        let json = serde_json::json!({
            "id": "7f0de5bc-1a2b-4c3d-9e8f-001122334455",
            "title": "Linen Shirt",
            "slug": "linen-shirt",
            "sku": "LNS",
            "type": "variant",
            "categoryIds": ["12", "19"],
            "status": "published",
            "isFeatured": true
        });
        let product: Product = serde_json::from_value(json).expect("deserialize");
        assert_eq!(product.product_type, ProductType::Variant);
        assert_eq!(product.category_ids, vec!["12", "19"]);
        assert!(product.is_featured);
        assert!(product.gallery.is_empty());
    }
}
