//! Pricing endpoints. The three record kinds share one wire convention:
//! records are fetched and deleted by `productId` (+ optional `variantId`)
//! query, created with POST, and replaced with PUT.
//!
//! `resolve` is the authoritative effective-price path; its JSON is passed
//! through untouched for display, never reinterpreted client-side.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use catctl_core::pricing::{ProductPricing, SpecialPricing, TierPricing};

use crate::client::CatalogClient;
use crate::decode;
use crate::error::ClientError;

fn keyed_query(product_id: Uuid, variant_id: Option<Uuid>) -> Vec<(&'static str, String)> {
    let mut query = vec![("productId", product_id.to_string())];
    if let Some(variant_id) = variant_id {
        query.push(("variantId", variant_id.to_string()));
    }
    query
}

impl CatalogClient {
    async fn get_pricing<T: DeserializeOwned>(
        &self,
        kind: &str,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<T, ClientError> {
        let context = format!("GET /api/pricing/{kind}");
        let body = self
            .get(
                &format!("api/pricing/{kind}"),
                &keyed_query(product_id, variant_id),
                &context,
            )
            .await?;
        decode::item(body, &context)
    }

    async fn create_pricing<T, B>(&self, kind: &str, record: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let context = format!("POST /api/pricing/{kind}");
        let body = self
            .post(&format!("api/pricing/{kind}"), record, &context)
            .await?;
        decode::item(body, &context)
    }

    async fn replace_pricing<T, B>(&self, kind: &str, record: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let context = format!("PUT /api/pricing/{kind}");
        let body = self
            .put(&format!("api/pricing/{kind}"), record, &context)
            .await?;
        decode::item(body, &context)
    }

    async fn delete_pricing(
        &self,
        kind: &str,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<(), ClientError> {
        let context = format!("DELETE /api/pricing/{kind}");
        self.delete(
            &format!("api/pricing/{kind}"),
            &keyed_query(product_id, variant_id),
            &context,
        )
        .await
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; an absent record surfaces as a 404 [`ClientError::Api`].
    pub async fn get_product_pricing(
        &self,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<ProductPricing, ClientError> {
        self.get_pricing("product", product_id, variant_id).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn create_product_pricing(
        &self,
        record: &ProductPricing,
    ) -> Result<ProductPricing, ClientError> {
        self.create_pricing("product", record).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn replace_product_pricing(
        &self,
        record: &ProductPricing,
    ) -> Result<ProductPricing, ClientError> {
        self.replace_pricing("product", record).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_product_pricing(
        &self,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<(), ClientError> {
        self.delete_pricing("product", product_id, variant_id).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn get_tier_pricing(
        &self,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<TierPricing, ClientError> {
        self.get_pricing("tier", product_id, variant_id).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn create_tier_pricing(
        &self,
        record: &TierPricing,
    ) -> Result<TierPricing, ClientError> {
        self.create_pricing("tier", record).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn replace_tier_pricing(
        &self,
        record: &TierPricing,
    ) -> Result<TierPricing, ClientError> {
        self.replace_pricing("tier", record).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_tier_pricing(
        &self,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<(), ClientError> {
        self.delete_pricing("tier", product_id, variant_id).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn get_special_pricing(
        &self,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<SpecialPricing, ClientError> {
        self.get_pricing("special", product_id, variant_id).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn create_special_pricing(
        &self,
        record: &SpecialPricing,
    ) -> Result<SpecialPricing, ClientError> {
        self.create_pricing("special", record).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn replace_special_pricing(
        &self,
        record: &SpecialPricing,
    ) -> Result<SpecialPricing, ClientError> {
        self.replace_pricing("special", record).await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_special_pricing(
        &self,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<(), ClientError> {
        self.delete_pricing("special", product_id, variant_id).await
    }

    /// Asks the backend for the effective price of a product/variant and
    /// returns the raw resolution JSON for display.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn resolve_price(
        &self,
        product_id: Uuid,
        variant_id: Option<Uuid>,
    ) -> Result<Value, ClientError> {
        const CTX: &str = "GET /api/pricing/resolve";
        self.get(
            "api/pricing/resolve",
            &keyed_query(product_id, variant_id),
            CTX,
        )
        .await
    }
}
