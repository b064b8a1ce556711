//! The single response-decoding boundary.
//!
//! The backend wraps payloads inconsistently across endpoints:
//! `{"data": {"items": [...]}}`, `{"data": [...]}`, `{"items": [...]}`, or
//! a bare array; single resources arrive under `"data"` or bare. Rather
//! than re-normalizing at every call site, every endpoint funnels its body
//! through [`list`] or [`item`], so the rest of the workspace consumes a
//! guaranteed shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Decodes a collection response, accepting any of the known envelope shapes.
///
/// # Errors
///
/// [`ClientError::UnexpectedShape`] when the body matches no known wrapper;
/// [`ClientError::Deserialize`] when the extracted array does not match `T`.
pub fn list<T: DeserializeOwned>(body: Value, context: &str) -> Result<Vec<T>, ClientError> {
    let items = extract_list(body).ok_or_else(|| ClientError::UnexpectedShape {
        context: context.to_string(),
    })?;
    serde_json::from_value(items).map_err(|e| ClientError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

/// Decodes a single-resource response, unwrapping a `"data"` envelope when
/// present.
///
/// # Errors
///
/// [`ClientError::Deserialize`] when the payload does not match `T`.
pub fn item<T: DeserializeOwned>(body: Value, context: &str) -> Result<T, ClientError> {
    let payload = extract_item(body);
    serde_json::from_value(payload).map_err(|e| ClientError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

fn extract_list(body: Value) -> Option<Value> {
    if body.is_array() {
        return Some(body);
    }
    let Value::Object(mut map) = body else {
        return None;
    };
    match map.remove("data") {
        Some(data @ Value::Array(_)) => return Some(data),
        Some(Value::Object(mut inner)) => {
            if let Some(items @ Value::Array(_)) = inner.remove("items") {
                return Some(items);
            }
            return None;
        }
        _ => {}
    }
    match map.remove("items") {
        Some(items @ Value::Array(_)) => Some(items),
        _ => None,
    }
}

fn extract_item(body: Value) -> Value {
    if let Value::Object(mut map) = body {
        match map.remove("data") {
            Some(Value::Null) | None => Value::Object(map),
            Some(data) => data,
        }
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    fn rows() -> Vec<Row> {
        vec![Row { id: 1 }, Row { id: 2 }]
    }

    #[test]
    fn bare_array_decodes() {
        let body = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(list::<Row>(body, "test").expect("decode"), rows());
    }

    #[test]
    fn data_array_decodes() {
        let body = json!({"data": [{"id": 1}, {"id": 2}]});
        assert_eq!(list::<Row>(body, "test").expect("decode"), rows());
    }

    #[test]
    fn data_items_decodes() {
        let body = json!({"data": {"items": [{"id": 1}, {"id": 2}], "total": 2}});
        assert_eq!(list::<Row>(body, "test").expect("decode"), rows());
    }

    #[test]
    fn top_level_items_decodes() {
        let body = json!({"items": [{"id": 1}, {"id": 2}]});
        assert_eq!(list::<Row>(body, "test").expect("decode"), rows());
    }

    #[test]
    fn unknown_list_shape_is_typed_error() {
        let body = json!({"rows": [{"id": 1}]});
        let result = list::<Row>(body, "GET /api/catalog/products");
        assert!(
            matches!(result, Err(ClientError::UnexpectedShape { ref context }) if context == "GET /api/catalog/products"),
            "expected UnexpectedShape with context, got: {result:?}"
        );
    }

    #[test]
    fn mismatched_rows_are_a_deserialize_error() {
        let body = json!([{"id": "not-a-number"}]);
        let result = list::<Row>(body, "test");
        assert!(matches!(result, Err(ClientError::Deserialize { .. })));
    }

    #[test]
    fn item_unwraps_data_envelope() {
        let body = json!({"data": {"id": 7}});
        assert_eq!(item::<Row>(body, "test").expect("decode"), Row { id: 7 });
    }

    #[test]
    fn bare_item_decodes() {
        let body = json!({"id": 7});
        assert_eq!(item::<Row>(body, "test").expect("decode"), Row { id: 7 });
    }

    #[test]
    fn item_with_null_data_falls_back_to_body() {
        // A null `data` key next to the real fields must not eat the record.
        let body = json!({"data": null, "id": 7});
        assert_eq!(item::<Row>(body, "test").expect("decode"), Row { id: 7 });
    }
}
