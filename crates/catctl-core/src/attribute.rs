use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single selectable value of an [`Attribute`], e.g. `{id: "v1", label: "Red"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeValue {
    pub id: String,
    pub label: String,
}

/// A reusable attribute definition, independent of any product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: Uuid,
    pub name: String,
    /// Backend-defined kind, e.g. `"select"` or `"color"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

/// The values an administrator picked for one attribute when generating
/// variants. Order is significant on both levels: attributes appear in the
/// generated SKU in selection order, values in listed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSelection {
    pub name: String,
    pub values: Vec<String>,
}

impl AttributeSelection {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}
