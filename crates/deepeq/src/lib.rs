//! deepeq - Order-insensitive, type-extended deep equality comparison.
//!
//! # Overview
//!
//! Two values compare equal when they are structurally equivalent, ignoring
//! array element order and object key order, with non-JSON-native types
//! (instants, big integers, maps, sets, regexps, binary, `undefined`, NaN)
//! compared by value. Intended for test assertions and data diffing.
//!
//! The pipeline has three stages, each a pure function:
//!
//! 1. encode each input into a plain JSON tree ([`deepeq_ext_json::encode`]);
//! 2. [`normalize`] each tree so ordering cannot affect comparison;
//! 3. compare the normal forms ([`deepeq_json_equal::deep_equal`]).
//!
//! # Example
//!
//! ```
//! use deepeq::{is_deep_equal, is_deep_equal_json, ExtValue};
//! use serde_json::json;
//!
//! // Plain JSON values, arrays as multisets:
//! assert!(is_deep_equal_json(
//!     &json!([{"a": [1, 2]}, {"b": 3}]),
//!     &json!([{"b": 3}, {"a": [2, 1]}]),
//! ));
//!
//! // Extended types compare by value:
//! let a = ExtValue::Date { timestamp_ms: 1_700_000_000_000 };
//! let b = ExtValue::Date { timestamp_ms: 1_700_000_000_000 };
//! assert!(is_deep_equal(&a, &b).unwrap());
//! ```

pub mod normalize;

pub use normalize::normalize;

pub use deepeq_ext_json::{decode, encode, DecodeError, EncodeError, ExtValue};
pub use deepeq_json_equal::deep_equal;

use serde_json::Value;

/// Returns `true` when the two values are deeply equal, ignoring array
/// element order and object key order, with extended types compared by
/// value.
///
/// Both sides are encoded and normalized independently; the comparison is
/// symmetric and side-effect free. An encoding failure (for example a
/// malformed `BigInt` payload) aborts the comparison and propagates to the
/// caller.
pub fn is_deep_equal(a: &ExtValue, b: &ExtValue) -> Result<bool, EncodeError> {
    Ok(deep_equal(&normalize(&encode(a)?), &normalize(&encode(b)?)))
}

/// Fast path for values already in plain JSON shape: no extended-type
/// encoding, so no error surface. Object keys beginning with `$` are
/// compared literally on this path.
pub fn is_deep_equal_json(a: &Value, b: &Value) -> bool {
    deep_equal(&normalize(a), &normalize(b))
}
