//! Canonical encoder: [`ExtValue`] into a plain [`serde_json::Value`] tree.
//!
//! Extended types become single-key `$`-wrapper objects. Plain object keys
//! that begin with `$` are escaped with a second `$` so wrappers stay
//! unambiguous. The encoding is canonical: value-equal inputs produce
//! identical output trees (big integers lose redundant signs and zeros,
//! regexp flags are sorted, integral floats collapse to integers).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Number, Value};

use crate::error::EncodeError;
use crate::value::ExtValue;

/// Largest float magnitude at which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// Encode an [`ExtValue`] into a plain JSON tree.
///
/// The only error path is a malformed `BigInt` payload; every other variant
/// is total.
pub fn encode(value: &ExtValue) -> Result<Value, EncodeError> {
    match value {
        ExtValue::Null => Ok(Value::Null),
        ExtValue::Undefined => Ok(wrap("$undefined", Value::Bool(true))),
        ExtValue::Bool(b) => Ok(Value::Bool(*b)),
        ExtValue::Integer(i) => Ok(Value::Number(Number::from(*i))),
        ExtValue::Float(f) => Ok(encode_float(*f)),
        ExtValue::BigInt(digits) => {
            Ok(wrap("$bigint", Value::String(canonical_bigint(digits)?)))
        }
        ExtValue::Str(s) => Ok(Value::String(s.clone())),
        ExtValue::Binary(bytes) => Ok(wrap("$binary", Value::String(BASE64.encode(bytes)))),
        ExtValue::Date { timestamp_ms } => {
            Ok(wrap("$date", Value::Number(Number::from(*timestamp_ms))))
        }
        ExtValue::RegExp { source, flags } => {
            let mut obj = Map::new();
            obj.insert("pattern".to_owned(), Value::String(source.clone()));
            obj.insert("flags".to_owned(), Value::String(sort_flags(flags)));
            Ok(wrap("$regexp", Value::Object(obj)))
        }
        ExtValue::Array(items) => {
            let encoded = items.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(encoded))
        }
        ExtValue::Object(fields) => {
            let mut obj = Map::new();
            for (key, field) in fields {
                obj.insert(escape_key(key), encode(field)?);
            }
            Ok(Value::Object(obj))
        }
        ExtValue::Map(entries) => {
            let pairs = entries
                .iter()
                .map(|(k, v)| Ok(Value::Array(vec![encode(k)?, encode(v)?])))
                .collect::<Result<Vec<_>, EncodeError>>()?;
            Ok(wrap("$map", Value::Array(pairs)))
        }
        ExtValue::Set(items) => {
            let encoded = items.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
            Ok(wrap("$set", Value::Array(encoded)))
        }
    }
}

/// Build a single-key `$`-wrapper object.
fn wrap(tag: &str, payload: Value) -> Value {
    let mut obj = Map::new();
    obj.insert(tag.to_owned(), payload);
    Value::Object(obj)
}

/// Escape a plain object key so it cannot collide with a wrapper tag.
fn escape_key(key: &str) -> String {
    if key.starts_with('$') {
        format!("${key}")
    } else {
        key.to_owned()
    }
}

/// Encode an `f64`, collapsing exact integral values to integer numbers so a
/// float and an integer holding the same value encode identically. NaN and
/// the infinities have no plain-JSON form and get a `$double` wrapper.
fn encode_float(f: f64) -> Value {
    if f.is_nan() {
        return wrap("$double", Value::String("NaN".to_owned()));
    }
    if f.is_infinite() {
        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
        return wrap("$double", Value::String(text.to_owned()));
    }
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        return Value::Number(Number::from(f as i64));
    }
    match Number::from_f64(f) {
        Some(n) => Value::Number(n),
        // Unreachable: non-finite values are handled above.
        None => Value::Null,
    }
}

/// Validate and canonicalize a decimal big-integer string: optional sign,
/// digits only, no redundant leading zeros, and `-0` collapses to `0`.
fn canonical_bigint(digits: &str) -> Result<String, EncodeError> {
    let (negative, rest) = match digits.as_bytes() {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        rest => (false, rest),
    };
    if rest.is_empty() || !rest.iter().all(u8::is_ascii_digit) {
        return Err(EncodeError::InvalidBigInt(digits.to_owned()));
    }
    let significant = rest
        .iter()
        .position(|&b| b != b'0')
        .map(|at| &rest[at..])
        .unwrap_or(&b"0"[..]);
    // Validated ASCII digits above.
    let body = std::str::from_utf8(significant).unwrap_or("0");
    if negative && body != "0" {
        Ok(format!("-{body}"))
    } else {
        Ok(body.to_owned())
    }
}

/// Sort regexp flag characters so flag order never affects equality.
fn sort_flags(flags: &str) -> String {
    let mut chars: Vec<char> = flags.chars().collect();
    chars.sort_unstable();
    chars.dedup();
    chars.into_iter().collect()
}
