//! deepeq-json-equal - Strict recursive structural equality for JSON values.
//!
//! Provides [`deep_equal`], the comparison predicate used as the final stage
//! of the `deepeq` pipeline. The predicate is order-sensitive for arrays and
//! key-order-agnostic for objects; callers that want array order ignored
//! normalize the values first (see the `deepeq` crate).

use serde_json::Value;

/// Performs a deep equality check between two JSON values.
///
/// Types are compared strictly: a number never equals a string, `null` never
/// equals `false`. Arrays compare element by element; objects compare as
/// key/value sets, so object key order does not matter.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use deepeq_json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// assert!(!deep_equal(&json!(1), &json!("1")));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        // Different types are never equal
        _ => false,
    }
}
