//! Product feature store: the cached product list an editing session works
//! against, plus variant persistence for generated drafts.

use uuid::Uuid;

use catctl_client::{CatalogClient, ClientError, Page};
use catctl_core::product::{Product, ProductDraft};
use catctl_core::variant::{Variant, VariantDraft};

use crate::slice::Slice;

pub struct ProductStore {
    client: CatalogClient,
    products: Slice<Vec<Product>>,
}

impl ProductStore {
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Slice::new(),
        }
    }

    /// The cached product list, if a fetch has completed.
    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        self.products.get().map(Vec::as_slice)
    }

    /// Fetches a page of products into the cache (latest-wins on overlap).
    ///
    /// # Errors
    ///
    /// Any [`ClientError`]. A failed refresh keeps the previously loaded
    /// list; only a failed initial fetch marks the slice failed.
    pub async fn fetch(&mut self, page: Page) -> Result<&[Product], ClientError> {
        let generation = self.products.begin();
        match self.client.list_products(page).await {
            Ok(products) => {
                self.products.resolve::<ClientError>(generation, Ok(products));
                Ok(self.products.get().map(Vec::as_slice).unwrap_or_default())
            }
            Err(e) => {
                tracing::warn!(error = %e, "product fetch failed");
                if self.products.get().is_none() {
                    self.products.resolve(generation, Err(&e));
                }
                Err(e)
            }
        }
    }

    /// Creates a product and splices it into the cache.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`]; the cache is untouched on failure.
    pub async fn create(&mut self, draft: &ProductDraft) -> Result<Product, ClientError> {
        let product = self.client.create_product(draft).await?;
        let created = product.clone();
        self.products.mutate(|items| items.push(product));
        Ok(created)
    }

    /// Updates a product and replaces it in the cache.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`]; the cache keeps the old record on failure.
    pub async fn update(&mut self, id: Uuid, draft: &ProductDraft) -> Result<Product, ClientError> {
        let product = self.client.update_product(id, draft).await?;
        let updated = product.clone();
        self.products.mutate(|items| {
            if let Some(slot) = items.iter_mut().find(|p| p.id == id) {
                *slot = product;
            }
        });
        Ok(updated)
    }

    /// Deletes a product and drops it from the cache.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`]; the cache keeps the record on failure.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.client.delete_product(id).await?;
        self.products.mutate(|items| items.retain(|p| p.id != id));
        Ok(())
    }

    /// Persists a batch of generated variant drafts one by one, in order.
    ///
    /// Returns the persisted variants for the drafts that succeeded before
    /// the first failure; the remainder of the batch is not attempted, so
    /// the caller can re-run generation or retry from the failure point.
    ///
    /// # Errors
    ///
    /// The first [`ClientError`] hit, alongside nothing — partial results
    /// are dropped with a warning because re-generation replaces drafts
    /// wholesale anyway.
    pub async fn save_variants(
        &self,
        product_id: Uuid,
        drafts: &[VariantDraft],
    ) -> Result<Vec<Variant>, ClientError> {
        let mut saved = Vec::with_capacity(drafts.len());
        for draft in drafts {
            match self.client.create_variant(product_id, draft).await {
                Ok(variant) => saved.push(variant),
                Err(e) => {
                    tracing::warn!(
                        saved = saved.len(),
                        total = drafts.len(),
                        error = %e,
                        "variant batch save stopped at first failure"
                    );
                    return Err(e);
                }
            }
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn product_json(id: &str, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "slug": "linen-shirt",
            "sku": "LNS",
            "type": "simple",
            "categoryIds": ["12"],
            "status": "published"
        })
    }

    fn store_for(server: &MockServer) -> ProductStore {
        let client = CatalogClient::new(&server.uri(), None, 5, "catctl-test/0.1")
            .expect("failed to build client");
        ProductStore::new(client)
    }

    const ID_A: &str = "11111111-1111-4111-8111-111111111111";
    const ID_B: &str = "22222222-2222-4222-8222-222222222222";

    #[tokio::test]
    async fn fetch_populates_the_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
                "data": [product_json(ID_A, "Shirt")]
            })))
            .mount(&server)
            .await;

        let mut store = store_for(&server);
        let products = store.fetch(Page::default()).await.expect("fetch");
        assert_eq!(products.len(), 1);
        assert_eq!(store.products().expect("cached").len(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
                "data": [product_json(ID_A, "Shirt")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut store = store_for(&server);
        store.fetch(Page::default()).await.expect("first fetch");

        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/products"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = store.fetch(Page::default()).await;
        assert!(result.is_err());
        assert_eq!(
            store.products().expect("cache should survive").len(),
            1,
            "failed refresh must not clear cached products"
        );
    }

    #[tokio::test]
    async fn delete_removes_from_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
                "data": [product_json(ID_A, "Shirt"), product_json(ID_B, "Mug")]
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/catalog/products/{ID_A}")))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let mut store = store_for(&server);
        store.fetch(Page::default()).await.expect("fetch");
        store
            .delete(ID_A.parse().expect("uuid"))
            .await
            .expect("delete");

        let remaining = store.products().expect("cached");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Mug");
    }

    #[tokio::test]
    async fn create_appends_to_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"data": []})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/catalog/products"))
            .respond_with(ResponseTemplate::new(201).set_body_json(&json!({
                "data": product_json(ID_A, "Shirt")
            })))
            .mount(&server)
            .await;

        let mut store = store_for(&server);
        store.fetch(Page::default()).await.expect("fetch");

        let draft: ProductDraft = serde_json::from_value(product_json(ID_A, "Shirt"))
            .expect("draft deserializes from product shape");
        let created = store.create(&draft).await.expect("create");
        assert_eq!(created.title, "Shirt");
        assert_eq!(store.products().expect("cached").len(), 1);
    }
}
