//! Catalog endpoints: products, variants, attributes, lookup lists,
//! FAQs, SEO, and the stock log.

use uuid::Uuid;

use catctl_core::attribute::Attribute;
use catctl_core::category::Category;
use catctl_core::faq::{Faq, FaqDraft};
use catctl_core::product::{Brand, Product, ProductDraft, Tag};
use catctl_core::seo::Seo;
use catctl_core::stock::{StockLog, StockLogDraft};
use catctl_core::variant::{Variant, VariantDraft};

use crate::client::{CatalogClient, Page};
use crate::decode;
use crate::error::ClientError;

impl CatalogClient {
    /// # Errors
    ///
    /// Any [`ClientError`]; see the crate-level error taxonomy.
    pub async fn list_products(&self, page: Page) -> Result<Vec<Product>, ClientError> {
        const CTX: &str = "GET /api/catalog/products";
        let body = self.get("api/catalog/products", &page.query(), CTX).await?;
        decode::list(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; a missing product surfaces as [`ClientError::Api`]
    /// with status 404.
    pub async fn get_product(&self, id: Uuid) -> Result<Product, ClientError> {
        let context = format!("GET /api/catalog/products/{id}");
        let body = self
            .get(&format!("api/catalog/products/{id}"), &[], &context)
            .await?;
        decode::item(body, &context)
    }

    /// # Errors
    ///
    /// Any [`ClientError`]. Callers validate the draft first; the backend
    /// re-validates and rejects with a 4xx `message` on conflict.
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ClientError> {
        const CTX: &str = "POST /api/catalog/products";
        let body = self.post("api/catalog/products", draft, CTX).await?;
        decode::item(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn update_product(
        &self,
        id: Uuid,
        draft: &ProductDraft,
    ) -> Result<Product, ClientError> {
        let context = format!("PATCH /api/catalog/products/{id}");
        let body = self
            .patch(&format!("api/catalog/products/{id}"), draft, &context)
            .await?;
        decode::item(body, &context)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_product(&self, id: Uuid) -> Result<(), ClientError> {
        let context = format!("DELETE /api/catalog/products/{id}");
        self.delete(&format!("api/catalog/products/{id}"), &[], &context)
            .await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ClientError> {
        const CTX: &str = "GET /api/catalog/brands";
        let body = self.get("api/catalog/brands", &[], CTX).await?;
        decode::list(body, CTX)
    }

    /// Flat category list; `parentId` references intact.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        const CTX: &str = "GET /api/catalog/categories";
        let body = self.get("api/catalog/categories", &[], CTX).await?;
        decode::list(body, CTX)
    }

    /// Nested category forest with `children` populated.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn category_tree(&self) -> Result<Vec<Category>, ClientError> {
        const CTX: &str = "GET /api/catalog/categories/tree";
        let body = self.get("api/catalog/categories/tree", &[], CTX).await?;
        decode::list(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ClientError> {
        const CTX: &str = "GET /api/catalog/tags";
        let body = self.get("api/catalog/tags", &[], CTX).await?;
        decode::list(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_attributes(&self) -> Result<Vec<Attribute>, ClientError> {
        const CTX: &str = "GET /api/catalog/attributes";
        let body = self.get("api/catalog/attributes", &[], CTX).await?;
        decode::list(body, CTX)
    }

    /// Variants of one product.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_variants(&self, product_id: Uuid) -> Result<Vec<Variant>, ClientError> {
        const CTX: &str = "GET /api/catalog/variants";
        let query = [("productId", product_id.to_string())];
        let body = self.get("api/catalog/variants", &query, CTX).await?;
        decode::list(body, CTX)
    }

    /// Persists one generated draft. The draft's `temp_id` stays client-side;
    /// the returned [`Variant`] carries the server-assigned id.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn create_variant(
        &self,
        product_id: Uuid,
        draft: &VariantDraft,
    ) -> Result<Variant, ClientError> {
        const CTX: &str = "POST /api/catalog/variants";
        let query = [("productId", product_id.to_string())];
        let body = self
            .post_with_query("api/catalog/variants", &query, draft, CTX)
            .await?;
        decode::item(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn update_variant(
        &self,
        id: Uuid,
        draft: &VariantDraft,
    ) -> Result<Variant, ClientError> {
        let context = format!("PATCH /api/catalog/variants/{id}");
        let body = self
            .patch(&format!("api/catalog/variants/{id}"), draft, &context)
            .await?;
        decode::item(body, &context)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_variant(&self, id: Uuid) -> Result<(), ClientError> {
        let context = format!("DELETE /api/catalog/variants/{id}");
        self.delete(&format!("api/catalog/variants/{id}"), &[], &context)
            .await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_faqs(&self, product_id: Uuid) -> Result<Vec<Faq>, ClientError> {
        const CTX: &str = "GET /api/catalog/product-faqs";
        let query = [("productId", product_id.to_string())];
        let body = self.get("api/catalog/product-faqs", &query, CTX).await?;
        decode::list(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn create_faq(&self, draft: &FaqDraft) -> Result<Faq, ClientError> {
        const CTX: &str = "POST /api/catalog/product-faqs";
        let body = self.post("api/catalog/product-faqs", draft, CTX).await?;
        decode::item(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_faq(&self, id: Uuid) -> Result<(), ClientError> {
        let context = format!("DELETE /api/catalog/product-faqs/{id}");
        self.delete(&format!("api/catalog/product-faqs/{id}"), &[], &context)
            .await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn get_seo(&self, product_id: Uuid) -> Result<Seo, ClientError> {
        let context = format!("GET /api/catalog/product-seo/{product_id}");
        let body = self
            .get(&format!("api/catalog/product-seo/{product_id}"), &[], &context)
            .await?;
        decode::item(body, &context)
    }

    /// Replaces the product's SEO record as a whole.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn put_seo(&self, product_id: Uuid, seo: &Seo) -> Result<Seo, ClientError> {
        let context = format!("PUT /api/catalog/product-seo/{product_id}");
        let body = self
            .put(&format!("api/catalog/product-seo/{product_id}"), seo, &context)
            .await?;
        decode::item(body, &context)
    }

    /// Stock log entries, optionally filtered to one product.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_stock(
        &self,
        product_id: Option<Uuid>,
        page: Page,
    ) -> Result<Vec<StockLog>, ClientError> {
        const CTX: &str = "GET /api/catalog/stock";
        let mut query = page.query();
        if let Some(product_id) = product_id {
            query.push(("productId", product_id.to_string()));
        }
        let body = self.get("api/catalog/stock", &query, CTX).await?;
        decode::list(body, CTX)
    }

    /// Appends a stock movement. Existing entries are never edited or
    /// deleted from the client.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn record_stock(&self, draft: &StockLogDraft) -> Result<StockLog, ClientError> {
        const CTX: &str = "POST /api/catalog/stock";
        let body = self.post("api/catalog/stock", draft, CTX).await?;
        decode::item(body, CTX)
    }
}
