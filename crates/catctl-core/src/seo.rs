use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-product SEO metadata, fetched and replaced as a whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub product_id: Uuid,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
}
