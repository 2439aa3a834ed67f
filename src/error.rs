// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("payload is not JSON-serializable: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("envelope is not valid base64: {0}")]
    Decoding(#[from] base64::DecodeError),

    #[error("decrypted bytes are not a JSON object: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("decrypted value for field `{0}` is not valid UTF-8")]
    MalformedField(String),

    #[error("inconsistent PKCS#7 padding — wrong key or corrupted ciphertext")]
    Padding,

    #[error("envelope failed authentication — wrong key or tampered data")]
    Verification,

    #[error("envelope too short: need at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("value for field `{0}` is not a scalar")]
    NonScalarField(String),

    #[error("emitting legacy envelopes is disabled — enable it explicitly to migrate old consumers")]
    LegacyEmitDisabled,
}
