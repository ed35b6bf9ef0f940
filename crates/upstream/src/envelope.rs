//! Normalization of upstream response envelopes.
//!
//! The backend is inconsistent about response shape: some endpoints return
//! a bare JSON array, others wrap it as `{"data": [...]}`, and single-record
//! endpoints may or may not nest the object under `"data"`. Screens must
//! never see that inconsistency, so every response passes through here and
//! comes out as an ordered record sequence (or a single record).

use serde_json::Value;

/// Extract the record sequence from a collection response.
///
/// Accepted shapes, in order of precedence:
/// - bare array: `[...]`
/// - enveloped array: `{"data": [...]}`
/// - enveloped single object: `{"data": {...}}` (yields one record)
///
/// Anything else yields an empty sequence; callers log the anomaly.
pub fn records(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(obj @ Value::Object(_)) => vec![obj],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Extract a single record from a get-by-id response.
///
/// Accepts a bare object or `{"data": {...}}`. A `{"data": [...]}` shape
/// yields the first element (some endpoints return one-element arrays).
pub fn record(body: Value) -> Option<Value> {
    match body {
        Value::Object(mut map) => {
            if map.contains_key("data") {
                match map.remove("data") {
                    Some(inner @ Value::Object(_)) => Some(inner),
                    Some(Value::Array(items)) => items.into_iter().next(),
                    _ => None,
                }
            } else {
                // A bare record object is returned as-is.
                Some(Value::Object(map))
            }
        }
        Value::Array(items) => items.into_iter().next(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_passes_through() {
        let rows = records(json!([{"_id": "1"}, {"_id": "2"}]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["_id"], "1");
    }

    #[test]
    fn data_envelope_is_unwrapped() {
        let rows = records(json!({"data": [{"_id": "1"}]}));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn enveloped_single_object_becomes_one_record() {
        let rows = records(json!({"data": {"_id": "1"}}));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["_id"], "1");
    }

    #[test]
    fn unknown_shapes_yield_empty() {
        assert!(records(json!("oops")).is_empty());
        assert!(records(json!({"message": "ok"})).is_empty());
        assert!(records(json!(null)).is_empty());
    }

    #[test]
    fn single_record_bare_object() {
        let rec = record(json!({"_id": "1", "name": "Flowers"})).unwrap();
        assert_eq!(rec["name"], "Flowers");
    }

    #[test]
    fn single_record_data_envelope() {
        let rec = record(json!({"data": {"_id": "1"}})).unwrap();
        assert_eq!(rec["_id"], "1");
    }

    #[test]
    fn single_record_from_one_element_array() {
        let rec = record(json!({"data": [{"_id": "1"}]})).unwrap();
        assert_eq!(rec["_id"], "1");
        assert!(record(json!([])).is_none());
    }

    #[test]
    fn single_record_null_data_is_none() {
        assert!(record(json!({"data": null})).is_none());
        assert!(record(json!(42)).is_none());
    }
}
