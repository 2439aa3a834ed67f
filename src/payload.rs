// src/payload.rs
//! Payload (de)serialization helpers
//!
//! A payload is a JSON object: string keys, arbitrary JSON values. Mapping
//! payloads serialize with sorted keys (serde_json's map is a BTreeMap), so
//! the byte form is canonical and the legacy CTR format stays deterministic.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CodecError;

pub type Result<T> = std::result::Result<T, CodecError>;

pub type Payload = Map<String, Value>;

/// Serialize to compact JSON bytes
pub fn to_canonical_bytes<T: Serialize>(payload: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(CodecError::Serialization)
}

/// Parse decrypted bytes back into a payload mapping
pub fn from_bytes(bytes: &[u8]) -> Result<Payload> {
    serde_json::from_slice(bytes).map_err(CodecError::MalformedPayload)
}

/// String form of a scalar value for the per-field legacy format.
///
/// Strings pass through bare; other scalars use their JSON text
/// (`42`, `true`, `null`). Nested containers are rejected — the per-field
/// format never supported them.
pub fn stringify_scalar(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null | Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(CodecError::NonScalarField(field.to_owned())),
    }
}

/// RFC 2822 date line in GMT — the form historical payloads carried timestamps in
pub fn rfc2822_utc(ts: &DateTime<Utc>) -> String {
    ts.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
