//! Canonical encoding matrix: every extended type, canonicalization rules,
//! wrapper escaping, and decode validation.

use deepeq_ext_json::{decode, encode, DecodeError, ExtValue};
use serde_json::json;

fn obj(fields: &[(&str, ExtValue)]) -> ExtValue {
    ExtValue::Object(
        fields
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Canonical form: value-equal inputs encode identically
// ---------------------------------------------------------------------------

#[test]
fn independently_built_dates_encode_identically() {
    let a = ExtValue::Date { timestamp_ms: 1_700_000_000_000 };
    let b = ExtValue::Date { timestamp_ms: 1_700_000_000_000 };
    assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
}

#[test]
fn bigint_spelling_variants_encode_identically() {
    for spelling in ["42", "+42", "042", "0042"] {
        assert_eq!(
            encode(&ExtValue::BigInt(spelling.into())).unwrap(),
            json!({"$bigint": "42"}),
            "spelling {spelling:?}"
        );
    }
}

#[test]
fn regexp_flag_order_does_not_matter() {
    let a = ExtValue::RegExp { source: "\\d+".into(), flags: "gim".into() };
    let b = ExtValue::RegExp { source: "\\d+".into(), flags: "mig".into() };
    assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
}

#[test]
fn integer_and_integral_float_encode_identically() {
    assert_eq!(
        encode(&ExtValue::Integer(5)).unwrap(),
        encode(&ExtValue::Float(5.0)).unwrap()
    );
}

#[test]
fn bigint_stays_distinct_from_integer() {
    assert_ne!(
        encode(&ExtValue::BigInt("5".into())).unwrap(),
        encode(&ExtValue::Integer(5)).unwrap()
    );
}

#[test]
fn undefined_stays_distinct_from_null() {
    assert_ne!(
        encode(&ExtValue::Undefined).unwrap(),
        encode(&ExtValue::Null).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Nesting
// ---------------------------------------------------------------------------

#[test]
fn extended_types_nest_inside_plain_shapes() {
    let v = obj(&[
        ("when", ExtValue::Date { timestamp_ms: 1 }),
        (
            "meta",
            ExtValue::Map(vec![(
                ExtValue::Set(vec![ExtValue::Integer(1)]),
                ExtValue::BigInt("9".into()),
            )]),
        ),
    ]);
    let encoded = encode(&v).unwrap();
    assert_eq!(
        encoded,
        json!({
            "when": {"$date": 1},
            "meta": {"$map": [[{"$set": [1]}, {"$bigint": "9"}]]},
        })
    );
}

#[test]
fn map_keys_may_be_any_value() {
    let v = ExtValue::Map(vec![
        (ExtValue::Null, ExtValue::Integer(0)),
        (ExtValue::Array(vec![ExtValue::Integer(1)]), ExtValue::Integer(1)),
    ]);
    assert_eq!(
        encode(&v).unwrap(),
        json!({"$map": [[null, 0], [[1], 1]]})
    );
}

// ---------------------------------------------------------------------------
// Round trips through the decoder
// ---------------------------------------------------------------------------

#[test]
fn decode_inverts_encode_for_every_variant() {
    let values = vec![
        ExtValue::Null,
        ExtValue::Undefined,
        ExtValue::Bool(false),
        ExtValue::Integer(-1),
        ExtValue::Float(2.5),
        ExtValue::Float(f64::NEG_INFINITY),
        ExtValue::BigInt("-98765432109876543210".into()),
        ExtValue::Str("hello".into()),
        ExtValue::Binary(vec![0, 255, 128]),
        ExtValue::Date { timestamp_ms: -1 },
        ExtValue::RegExp { source: "^a$".into(), flags: "i".into() },
        ExtValue::Array(vec![ExtValue::Integer(1), ExtValue::Undefined]),
        obj(&[("$escaped", ExtValue::Bool(true))]),
        ExtValue::Map(vec![(ExtValue::Integer(1), ExtValue::Str("one".into()))]),
        ExtValue::Set(vec![ExtValue::Str("x".into())]),
    ];
    for v in values {
        let encoded = encode(&v).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(
            encode(&decoded).unwrap(),
            encoded,
            "round trip changed encoding of {v:?}"
        );
    }
}

#[test]
fn foreign_dollar_wrapper_is_rejected() {
    assert_eq!(
        decode(&json!({"$timestamp": {"t": 1, "i": 2}})),
        Err(DecodeError::UnknownWrapper("$timestamp".into()))
    );
}
