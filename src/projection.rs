//! Shallow key filtering of handler results.
//!
//! Projection matches literal top-level key names. It knows nothing about
//! the shape a calculator returns, so `{ value }` over a result without a
//! `value` key yields an empty object.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{error::QueryError, fields::FieldSelector};

/// Filters an already-serialized result.
///
/// Objects keep the keys the selector includes (all of them under a
/// wildcard). Arrays and scalars are wrapped unfiltered as `{"value": ...}`.
pub fn project_value(selector: &FieldSelector, result: Value) -> Map<String, Value> {
    match result {
        Value::Object(map) if selector.is_wildcard() => map,
        Value::Object(map) => {
            let before = map.len();
            let kept: Map<String, Value> = map
                .into_iter()
                .filter(|(key, _)| selector.include(key))
                .collect();
            debug!(before, after = kept.len(), "projected result");
            kept
        }
        other => {
            let mut wrapped = Map::new();
            wrapped.insert("value".to_string(), other);
            wrapped
        }
    }
}

/// Serializes `result` and projects it.
///
/// A serialization failure is an internal error, never a selector error.
pub fn project<T: Serialize + ?Sized>(
    selector: &FieldSelector,
    result: &T,
) -> Result<Map<String, Value>, QueryError> {
    let value = serde_json::to_value(result)
        .map_err(|e| QueryError::Internal(format!("serializing result: {}", e)))?;
    Ok(project_value(selector, value))
}
