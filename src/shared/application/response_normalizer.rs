//! Success envelope normalization applied to every successful handler result.

use serde_json::{Map, Value, json};

use crate::shared::domain::model::value_objects::page::{Page, PaginatedResponse};

/// Wraps a handler result in the success envelope.
///
/// Values that already carry `success` pass through, raw page objects
/// (`items`, `total`, `page`, `limit`) become paginated envelopes, anything
/// else is wrapped as `{ success: true, data }`.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) if map.contains_key("success") => Value::Object(map),
        Value::Object(map) => match as_page(&map) {
            Some(page) => json!(PaginatedResponse::from(page)),
            None => json!({ "success": true, "data": Value::Object(map) }),
        },
        other => json!({ "success": true, "data": other }),
    }
}

fn as_page(map: &Map<String, Value>) -> Option<Page<Value>> {
    let items = map.get("items")?.as_array()?;
    let total = map.get("total")?.as_u64()?;
    let page = map.get("page")?.as_u64()?;
    let limit = map.get("limit")?.as_u64()?;

    Some(Page {
        items: items.clone(),
        total,
        page,
        limit,
    })
}
