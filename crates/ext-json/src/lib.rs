//! deepeq-ext-json - Extended value model and canonical plain-JSON encoding.
//!
//! # Overview
//!
//! JSON cannot natively carry instants, big integers, maps with non-string
//! keys, sets, regular expressions, binary blobs, `undefined` or non-finite
//! numbers. This crate models those as [`ExtValue`] and encodes them into
//! plain [`serde_json::Value`] trees using single-key `$`-wrapper objects
//! (e.g. `{"$date": 1700000000000}`), so that a structural equality check
//! over plain JSON can compare them by value.
//!
//! Two independently constructed extended values that represent the same
//! value (the same instant, the same integer) always encode to the same
//! plain-JSON tree.
//!
//! # Example
//!
//! ```
//! use deepeq_ext_json::{encode, ExtValue};
//! use serde_json::json;
//!
//! let a = ExtValue::Date { timestamp_ms: 1700000000000 };
//! let b = ExtValue::Date { timestamp_ms: 1700000000000 };
//! assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
//! assert_eq!(encode(&a).unwrap(), json!({"$date": 1700000000000i64}));
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod value;

pub use decoder::decode;
pub use encoder::encode;
pub use error::{DecodeError, EncodeError};
pub use value::ExtValue;
