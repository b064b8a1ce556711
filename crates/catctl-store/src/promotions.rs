//! Promotion feature store: combo offers and flash sales side by side,
//! since the editing screens switch between them constantly.

use uuid::Uuid;

use catctl_client::{CatalogClient, ClientError, Page};
use catctl_core::promotion::{ComboDraft, ComboOffer, FlashSale, FlashSaleDraft};

use crate::slice::Slice;

pub struct PromotionStore {
    client: CatalogClient,
    combos: Slice<Vec<ComboOffer>>,
    flash_sales: Slice<Vec<FlashSale>>,
}

impl PromotionStore {
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            combos: Slice::new(),
            flash_sales: Slice::new(),
        }
    }

    #[must_use]
    pub fn combos(&self) -> Option<&[ComboOffer]> {
        self.combos.get().map(Vec::as_slice)
    }

    #[must_use]
    pub fn flash_sales(&self) -> Option<&[FlashSale]> {
        self.flash_sales.get().map(Vec::as_slice)
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; a failed refresh keeps previously loaded data.
    pub async fn fetch_combos(&mut self, page: Page) -> Result<&[ComboOffer], ClientError> {
        let generation = self.combos.begin();
        match self.client.list_combos(page).await {
            Ok(combos) => {
                self.combos.resolve::<ClientError>(generation, Ok(combos));
                Ok(self.combos.get().map(Vec::as_slice).unwrap_or_default())
            }
            Err(e) => {
                if self.combos.get().is_none() {
                    self.combos.resolve(generation, Err(&e));
                }
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; the cache is untouched on failure.
    pub async fn create_combo(&mut self, draft: &ComboDraft) -> Result<ComboOffer, ClientError> {
        let combo = self.client.create_combo(draft).await?;
        let created = combo.clone();
        self.combos.mutate(|items| items.push(combo));
        Ok(created)
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; the cache keeps the old record on failure.
    pub async fn update_combo(
        &mut self,
        id: Uuid,
        draft: &ComboDraft,
    ) -> Result<ComboOffer, ClientError> {
        let combo = self.client.update_combo(id, draft).await?;
        let updated = combo.clone();
        self.combos.mutate(|items| {
            if let Some(slot) = items.iter_mut().find(|c| c.id == id) {
                *slot = combo;
            }
        });
        Ok(updated)
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; the cache keeps the record on failure.
    pub async fn delete_combo(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.client.delete_combo(id).await?;
        self.combos.mutate(|items| items.retain(|c| c.id != id));
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; a failed refresh keeps previously loaded data.
    pub async fn fetch_flash_sales(&mut self, page: Page) -> Result<&[FlashSale], ClientError> {
        let generation = self.flash_sales.begin();
        match self.client.list_flash_sales(page).await {
            Ok(sales) => {
                self.flash_sales.resolve::<ClientError>(generation, Ok(sales));
                Ok(self.flash_sales.get().map(Vec::as_slice).unwrap_or_default())
            }
            Err(e) => {
                if self.flash_sales.get().is_none() {
                    self.flash_sales.resolve(generation, Err(&e));
                }
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; the cache is untouched on failure.
    pub async fn create_flash_sale(
        &mut self,
        draft: &FlashSaleDraft,
    ) -> Result<FlashSale, ClientError> {
        let sale = self.client.create_flash_sale(draft).await?;
        let created = sale.clone();
        self.flash_sales.mutate(|items| items.push(sale));
        Ok(created)
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; the cache keeps the record on failure.
    pub async fn delete_flash_sale(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.client.delete_flash_sale(id).await?;
        self.flash_sales.mutate(|items| items.retain(|s| s.id != id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const COMBO_ID: &str = "33333333-3333-4333-8333-333333333333";

    fn combo_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Summer Bundle",
            "items": [{"productId": "11111111-1111-4111-8111-111111111111", "quantity": 2}],
            "combinedPrice": "30",
            "startsAt": "2026-05-01T00:00:00Z",
            "endsAt": "2026-05-08T00:00:00Z",
            "status": "active"
        })
    }

    #[tokio::test]
    async fn combos_and_flash_sales_are_cached_independently() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/promotions/combo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
                "data": [combo_json(COMBO_ID)]
            })))
            .mount(&server)
            .await;

        let client = CatalogClient::new(&server.uri(), None, 5, "catctl-test/0.1")
            .expect("failed to build client");
        let mut store = PromotionStore::new(client);
        store.fetch_combos(Page::default()).await.expect("fetch");

        assert_eq!(store.combos().expect("cached").len(), 1);
        assert!(
            store.flash_sales().is_none(),
            "flash sales were never fetched"
        );
    }

    #[tokio::test]
    async fn delete_combo_drops_cached_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/promotions/combo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
                "data": [combo_json(COMBO_ID)]
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/promotions/combo/{COMBO_ID}")))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = CatalogClient::new(&server.uri(), None, 5, "catctl-test/0.1")
            .expect("failed to build client");
        let mut store = PromotionStore::new(client);
        store.fetch_combos(Page::default()).await.expect("fetch");
        store
            .delete_combo(COMBO_ID.parse().expect("uuid"))
            .await
            .expect("delete");
        assert!(store.combos().expect("cached").is_empty());
    }
}
