//! Shared `ExtValue` type used by both encoder and decoder.

use serde::Serialize;
use serde_json::Value;

use crate::error::EncodeError;

/// A value in the extended comparison domain.
///
/// Covers plain JSON shapes plus the non-JSON-native types that compare by
/// value: time instants, arbitrary-precision integers, maps with arbitrary
/// keys, sets, regular expressions, binary blobs, `undefined`, and
/// non-finite numbers (NaN and infinities live in the `Float` variant).
#[derive(Debug, Clone, PartialEq)]
pub enum ExtValue {
    Null,
    Undefined,
    Bool(bool),
    Integer(i64),
    /// Any `f64`, including NaN and the infinities.
    Float(f64),
    /// Arbitrary-precision integer as an optionally-signed decimal string.
    BigInt(String),
    Str(String),
    Binary(Vec<u8>),
    /// A time instant as milliseconds since the Unix epoch.
    Date { timestamp_ms: i64 },
    /// A pattern matcher. `flags` is an unordered set of flag characters.
    RegExp { source: String, flags: String },
    Array(Vec<ExtValue>),
    Object(Vec<(String, ExtValue)>),
    /// Key-value collection whose keys may be any `ExtValue`.
    Map(Vec<(ExtValue, ExtValue)>),
    /// Unique-element collection. Element order carries no meaning.
    Set(Vec<ExtValue>),
}

impl ExtValue {
    /// Converts any `Serialize` input into an `ExtValue` via its plain-JSON
    /// shape. Extended variants never come out of this constructor; it is
    /// the bridge for callers whose values are ordinary serde types.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, EncodeError> {
        Ok(Self::from(serde_json::to_value(value)?))
    }
}

impl From<Value> for ExtValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ExtValue::Null,
            Value::Bool(b) => ExtValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ExtValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    // Above i64::MAX; keep full precision as a big integer.
                    ExtValue::BigInt(u.to_string())
                } else {
                    ExtValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => ExtValue::Str(s),
            Value::Array(items) => {
                ExtValue::Array(items.into_iter().map(ExtValue::from).collect())
            }
            Value::Object(fields) => ExtValue::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, ExtValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for ExtValue {
    fn from(b: bool) -> Self {
        ExtValue::Bool(b)
    }
}

impl From<i64> for ExtValue {
    fn from(i: i64) -> Self {
        ExtValue::Integer(i)
    }
}

impl From<i32> for ExtValue {
    fn from(i: i32) -> Self {
        ExtValue::Integer(i64::from(i))
    }
}

impl From<f64> for ExtValue {
    fn from(f: f64) -> Self {
        ExtValue::Float(f)
    }
}

impl From<&str> for ExtValue {
    fn from(s: &str) -> Self {
        ExtValue::Str(s.to_owned())
    }
}

impl From<String> for ExtValue {
    fn from(s: String) -> Self {
        ExtValue::Str(s)
    }
}

impl From<Vec<ExtValue>> for ExtValue {
    fn from(items: Vec<ExtValue>) -> Self {
        ExtValue::Array(items)
    }
}
