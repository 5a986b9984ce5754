//! Decoder: plain JSON trees produced by [`encode`](crate::encode) back
//! into [`ExtValue`].
//!
//! Wrapper payloads are validated strictly: a `$`-wrapper with a malformed
//! payload or extra keys is an error, never silently treated as a plain
//! object.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::value::ExtValue;

/// Decode a plain JSON tree into an [`ExtValue`].
///
/// For any `v`, `decode(encode(v))` succeeds and re-encodes to the same
/// tree as `v`.
pub fn decode(value: &Value) -> Result<ExtValue, DecodeError> {
    match value {
        Value::Null => Ok(ExtValue::Null),
        Value::Bool(b) => Ok(ExtValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(ExtValue::Integer(i))
            } else if let Some(u) = n.as_u64() {
                Ok(ExtValue::BigInt(u.to_string()))
            } else {
                Ok(ExtValue::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        Value::String(s) => Ok(ExtValue::Str(s.clone())),
        Value::Array(items) => {
            let decoded = items.iter().map(decode).collect::<Result<Vec<_>, _>>()?;
            Ok(ExtValue::Array(decoded))
        }
        Value::Object(fields) => decode_object(fields),
    }
}

fn decode_object(fields: &Map<String, Value>) -> Result<ExtValue, DecodeError> {
    let wrapper_key = fields
        .keys()
        .find(|key| key.starts_with('$') && !key.starts_with("$$"));

    if let Some(tag) = wrapper_key {
        if fields.len() != 1 {
            return Err(match tag.as_str() {
                "$undefined" => DecodeError::ExtraKeys("$undefined"),
                "$double" => DecodeError::ExtraKeys("$double"),
                "$bigint" => DecodeError::ExtraKeys("$bigint"),
                "$binary" => DecodeError::ExtraKeys("$binary"),
                "$date" => DecodeError::ExtraKeys("$date"),
                "$regexp" => DecodeError::ExtraKeys("$regexp"),
                "$map" => DecodeError::ExtraKeys("$map"),
                "$set" => DecodeError::ExtraKeys("$set"),
                _ => DecodeError::UnknownWrapper(tag.clone()),
            });
        }
        let payload = &fields[tag.as_str()];
        return decode_wrapper(tag, payload);
    }

    let mut out = Vec::with_capacity(fields.len());
    for (key, field) in fields {
        out.push((unescape_key(key), decode(field)?));
    }
    Ok(ExtValue::Object(out))
}

fn decode_wrapper(tag: &str, payload: &Value) -> Result<ExtValue, DecodeError> {
    match tag {
        "$undefined" => match payload {
            Value::Bool(true) => Ok(ExtValue::Undefined),
            _ => Err(DecodeError::InvalidUndefined),
        },
        "$double" => match payload.as_str() {
            Some("NaN") => Ok(ExtValue::Float(f64::NAN)),
            Some("Infinity") => Ok(ExtValue::Float(f64::INFINITY)),
            Some("-Infinity") => Ok(ExtValue::Float(f64::NEG_INFINITY)),
            _ => Err(DecodeError::InvalidDouble(payload.to_string())),
        },
        "$bigint" => match payload.as_str() {
            Some(digits) if is_canonical_bigint(digits) => {
                Ok(ExtValue::BigInt(digits.to_owned()))
            }
            _ => Err(DecodeError::InvalidBigInt(payload.to_string())),
        },
        "$binary" => match payload.as_str() {
            Some(text) => BASE64
                .decode(text)
                .map(ExtValue::Binary)
                .map_err(|_| DecodeError::InvalidBinary),
            None => Err(DecodeError::InvalidBinary),
        },
        "$date" => match payload.as_i64() {
            Some(timestamp_ms) => Ok(ExtValue::Date { timestamp_ms }),
            None => Err(DecodeError::InvalidDate),
        },
        "$regexp" => {
            let obj = payload.as_object().ok_or(DecodeError::InvalidRegExp)?;
            if obj.len() != 2 {
                return Err(DecodeError::InvalidRegExp);
            }
            let source = obj
                .get("pattern")
                .and_then(Value::as_str)
                .ok_or(DecodeError::InvalidRegExp)?;
            let flags = obj
                .get("flags")
                .and_then(Value::as_str)
                .ok_or(DecodeError::InvalidRegExp)?;
            Ok(ExtValue::RegExp {
                source: source.to_owned(),
                flags: flags.to_owned(),
            })
        }
        "$map" => {
            let pairs = payload.as_array().ok_or(DecodeError::InvalidMap)?;
            let mut entries = Vec::with_capacity(pairs.len());
            for pair in pairs {
                match pair.as_array().map(Vec::as_slice) {
                    Some([key, value]) => entries.push((decode(key)?, decode(value)?)),
                    _ => return Err(DecodeError::InvalidMap),
                }
            }
            Ok(ExtValue::Map(entries))
        }
        "$set" => {
            let items = payload.as_array().ok_or(DecodeError::InvalidSet)?;
            let decoded = items.iter().map(decode).collect::<Result<Vec<_>, _>>()?;
            Ok(ExtValue::Set(decoded))
        }
        other => Err(DecodeError::UnknownWrapper(other.to_owned())),
    }
}

/// Reverse the `$` escaping applied by the encoder to plain object keys.
fn unescape_key(key: &str) -> String {
    match key.strip_prefix('$') {
        Some(rest) if rest.starts_with('$') => rest.to_owned(),
        _ => key.to_owned(),
    }
}

/// Canonical big-integer text: optional `-`, digits, no redundant zeros.
fn is_canonical_bigint(digits: &str) -> bool {
    let body = digits.strip_prefix('-').unwrap_or(digits);
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if body.len() > 1 && body.starts_with('0') {
        return false;
    }
    // "-0" is not canonical.
    !(digits.starts_with('-') && body == "0")
}
