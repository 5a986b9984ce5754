//! Deep equality matrix: reflexivity, symmetry, type strictness, null
//! handling, number edge cases, nested structures.

use deepeq_json_equal::deep_equal;
use serde_json::json;

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_scalars() {
    for v in [json!(null), json!(false), json!(0), json!(-1.5), json!("")] {
        assert!(deep_equal(&v, &v), "value not equal to itself: {v}");
    }
}

#[test]
fn reflexivity_composites() {
    let v = json!({"complex": [1, 2, {"nested": true, "empty": {}}], "arr": []});
    assert!(deep_equal(&v, &v));
}

// ---------------------------------------------------------------------------
// Symmetry
// ---------------------------------------------------------------------------

#[test]
fn symmetry_equal_and_unequal() {
    let pairs = [
        (json!({"x": 1}), json!({"x": 1}), true),
        (json!({"x": 1}), json!({"x": 2}), false),
        (json!([1, [2]]), json!([1, [2]]), true),
        (json!(1), json!("1"), false),
    ];
    for (a, b, expected) in pairs {
        assert_eq!(deep_equal(&a, &b), expected, "{a} vs {b}");
        assert_eq!(deep_equal(&b, &a), expected, "{b} vs {a}");
    }
}

// ---------------------------------------------------------------------------
// Null handling
// ---------------------------------------------------------------------------

#[test]
fn null_is_only_equal_to_null() {
    assert!(deep_equal(&json!(null), &json!(null)));
    assert!(!deep_equal(&json!(null), &json!(0)));
    assert!(!deep_equal(&json!(null), &json!(false)));
    assert!(!deep_equal(&json!(null), &json!("")));
    assert!(!deep_equal(&json!(null), &json!([])));
    assert!(!deep_equal(&json!(null), &json!({})));
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[test]
fn number_edge_cases() {
    assert!(deep_equal(&json!(0), &json!(0)));
    assert!(deep_equal(&json!(-0.5), &json!(-0.5)));
    assert!(deep_equal(&json!(i64::MAX), &json!(i64::MAX)));
    assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
    assert!(!deep_equal(&json!(1), &json!(2)));
    // Integer and float representations are distinct serde_json numbers.
    assert!(!deep_equal(&json!(1), &json!(1.5)));
}

// ---------------------------------------------------------------------------
// Structures
// ---------------------------------------------------------------------------

#[test]
fn empty_containers() {
    assert!(deep_equal(&json!([]), &json!([])));
    assert!(deep_equal(&json!({}), &json!({})));
    assert!(!deep_equal(&json!([]), &json!([null])));
    assert!(!deep_equal(&json!({}), &json!({"a": null})));
}

#[test]
fn deeply_nested_mismatch_is_found() {
    let a = json!({"a": {"b": {"c": [1, 2, {"d": true}]}}});
    let b = json!({"a": {"b": {"c": [1, 2, {"d": false}]}}});
    assert!(!deep_equal(&a, &b));
}

#[test]
fn object_key_order_is_irrelevant_at_depth() {
    let a = json!({"outer": {"a": 1, "b": {"x": [true], "y": null}}});
    let b = json!({"outer": {"b": {"y": null, "x": [true]}, "a": 1}});
    assert!(deep_equal(&a, &b));
}
