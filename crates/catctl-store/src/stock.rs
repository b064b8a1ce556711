//! Stock log store. Append-only: record and fetch, nothing else.

use uuid::Uuid;

use catctl_client::{CatalogClient, ClientError, Page};
use catctl_core::stock::{StockLog, StockLogDraft};

use crate::slice::Slice;

pub struct StockStore {
    client: CatalogClient,
    entries: Slice<Vec<StockLog>>,
}

impl StockStore {
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            entries: Slice::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> Option<&[StockLog]> {
        self.entries.get().map(Vec::as_slice)
    }

    /// # Errors
    ///
    /// Any [`ClientError`]; a failed refresh keeps previously loaded data.
    pub async fn fetch(
        &mut self,
        product_id: Option<Uuid>,
        page: Page,
    ) -> Result<&[StockLog], ClientError> {
        let generation = self.entries.begin();
        match self.client.list_stock(product_id, page).await {
            Ok(entries) => {
                self.entries.resolve::<ClientError>(generation, Ok(entries));
                Ok(self.entries.get().map(Vec::as_slice).unwrap_or_default())
            }
            Err(e) => {
                if self.entries.get().is_none() {
                    self.entries.resolve(generation, Err(&e));
                }
                Err(e)
            }
        }
    }

    /// Appends a movement and, on success, the returned entry to the cache.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`]; the cache is untouched on failure.
    pub async fn record(&mut self, draft: &StockLogDraft) -> Result<StockLog, ClientError> {
        let entry = self.client.record_stock(draft).await?;
        let recorded = entry.clone();
        self.entries.mutate(|items| items.push(entry));
        Ok(recorded)
    }
}
