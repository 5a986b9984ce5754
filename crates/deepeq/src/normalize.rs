//! Canonicalization of JSON trees so that array element order and object
//! key order cannot affect a structural equality check.

use serde_json::{Map, Value};

/// Rewrites a JSON tree into its normal form.
///
/// Arrays are normalized element-wise and then sorted by the canonical text
/// of each *normalized* element; objects are rebuilt with keys in ascending
/// lexicographic order. Primitives pass through unchanged. The result is a
/// new tree; the input is never mutated.
///
/// Normalization is total and idempotent: `normalize(&normalize(x))` equals
/// `normalize(x)` for every input.
///
/// Children are normalized before the parent's sort keys are computed
/// (post-order). Sorting by the text of raw elements instead would let two
/// differently-ordered nested arrays receive different sort keys even when
/// they are equal as multisets.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use deepeq::normalize;
///
/// assert_eq!(normalize(&json!([3, 1, 2])), normalize(&json!([2, 3, 1])));
/// assert_eq!(normalize(&json!({"b": 1, "a": 2})), json!({"a": 2, "b": 1}));
/// ```
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => {
            let mut keyed: Vec<(String, Value)> = items
                .iter()
                .map(|item| {
                    let normalized = normalize(item);
                    (canonical_text(&normalized), normalized)
                })
                .collect();
            // Equal sort keys only occur between structurally equal elements,
            // so their relative order is irrelevant.
            keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Array(keyed.into_iter().map(|(_, item)| item).collect())
        }
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort_unstable();
            let mut out = Map::new();
            for key in keys {
                out.insert(key.clone(), normalize(&fields[key.as_str()]));
            }
            Value::Object(out)
        }
        leaf => leaf.clone(),
    }
}

/// Compact serialization of an already-normalized value, used as an array
/// sort key. Stable because every nested object has sorted keys by the time
/// this runs.
fn canonical_text(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
