use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ValidationError;

/// A question/answer pair attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: Uuid,
    pub product_id: Uuid,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqDraft {
    pub product_id: Uuid,
    pub question: String,
    pub answer: String,
}

impl FaqDraft {
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for a blank question or answer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::MissingField("question"));
        }
        if self.answer.trim().is_empty() {
            return Err(ValidationError::MissingField("answer"));
        }
        Ok(())
    }
}
