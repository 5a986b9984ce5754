use thiserror::Error;

/// Errors that can occur while encoding an [`ExtValue`](crate::ExtValue)
/// into plain JSON.
///
/// Encoding failure is fatal for the comparison that triggered it; nothing
/// in the pipeline catches or translates these.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The `BigInt` payload is not an optionally-signed decimal integer.
    #[error("invalid BigInt payload: {0:?}")]
    InvalidBigInt(String),

    /// A `Serialize` input could not be converted to a JSON value.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur while decoding plain JSON back into an
/// [`ExtValue`](crate::ExtValue).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Invalid `{"$undefined": true}` wrapper.
    #[error("invalid $undefined wrapper")]
    InvalidUndefined,

    /// Invalid `{"$double": "NaN" | "Infinity" | "-Infinity"}` wrapper.
    #[error("invalid $double wrapper: {0:?}")]
    InvalidDouble(String),

    /// Invalid `{"$bigint": "..."}` wrapper.
    #[error("invalid $bigint wrapper: {0:?}")]
    InvalidBigInt(String),

    /// Invalid `{"$binary": "..."}` wrapper (bad base64).
    #[error("invalid $binary wrapper")]
    InvalidBinary,

    /// Invalid `{"$date": <ms>}` wrapper.
    #[error("invalid $date wrapper")]
    InvalidDate,

    /// Invalid `{"$regexp": {"pattern": ..., "flags": ...}}` wrapper.
    #[error("invalid $regexp wrapper")]
    InvalidRegExp,

    /// Invalid `{"$map": [[k, v], ...]}` wrapper.
    #[error("invalid $map wrapper")]
    InvalidMap,

    /// Invalid `{"$set": [...]}` wrapper.
    #[error("invalid $set wrapper")]
    InvalidSet,

    /// Unknown `$`-prefixed wrapper key.
    #[error("unknown wrapper key: {0:?}")]
    UnknownWrapper(String),

    /// A wrapper object carried keys besides its discriminator.
    #[error("invalid {0} wrapper: extra keys not allowed")]
    ExtraKeys(&'static str),
}
