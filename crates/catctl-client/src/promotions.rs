//! Promotion endpoints: combo offers and flash sales.

use uuid::Uuid;

use catctl_core::promotion::{ComboDraft, ComboOffer, FlashSale, FlashSaleDraft};

use crate::client::{CatalogClient, Page};
use crate::decode;
use crate::error::ClientError;

impl CatalogClient {
    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_combos(&self, page: Page) -> Result<Vec<ComboOffer>, ClientError> {
        const CTX: &str = "GET /api/promotions/combo";
        let body = self.get("api/promotions/combo", &page.query(), CTX).await?;
        decode::list(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn create_combo(&self, draft: &ComboDraft) -> Result<ComboOffer, ClientError> {
        const CTX: &str = "POST /api/promotions/combo";
        let body = self.post("api/promotions/combo", draft, CTX).await?;
        decode::item(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn update_combo(
        &self,
        id: Uuid,
        draft: &ComboDraft,
    ) -> Result<ComboOffer, ClientError> {
        let context = format!("PATCH /api/promotions/combo/{id}");
        let body = self
            .patch(&format!("api/promotions/combo/{id}"), draft, &context)
            .await?;
        decode::item(body, &context)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_combo(&self, id: Uuid) -> Result<(), ClientError> {
        let context = format!("DELETE /api/promotions/combo/{id}");
        self.delete(&format!("api/promotions/combo/{id}"), &[], &context)
            .await
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn list_flash_sales(&self, page: Page) -> Result<Vec<FlashSale>, ClientError> {
        const CTX: &str = "GET /api/promotions/flash-sale";
        let body = self
            .get("api/promotions/flash-sale", &page.query(), CTX)
            .await?;
        decode::list(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn create_flash_sale(
        &self,
        draft: &FlashSaleDraft,
    ) -> Result<FlashSale, ClientError> {
        const CTX: &str = "POST /api/promotions/flash-sale";
        let body = self.post("api/promotions/flash-sale", draft, CTX).await?;
        decode::item(body, CTX)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn update_flash_sale(
        &self,
        id: Uuid,
        draft: &FlashSaleDraft,
    ) -> Result<FlashSale, ClientError> {
        let context = format!("PATCH /api/promotions/flash-sale/{id}");
        let body = self
            .patch(&format!("api/promotions/flash-sale/{id}"), draft, &context)
            .await?;
        decode::item(body, &context)
    }

    /// # Errors
    ///
    /// Any [`ClientError`].
    pub async fn delete_flash_sale(&self, id: Uuid) -> Result<(), ClientError> {
        let context = format!("DELETE /api/promotions/flash-sale/{id}");
        self.delete(&format!("api/promotions/flash-sale/{id}"), &[], &context)
            .await
    }
}
