// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: envelope formats, migration sources, etc.

use serde::{Deserialize, Serialize};

/// Wire formats this codec understands.
///
/// Only `SealedV1` is ever emitted by default; the legacy variants exist so
/// envelopes produced by earlier deployments can still be decrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum EnvelopeFormat {
    /// base64(salt ‖ nonce ‖ AES-256-GCM ciphertext+tag), whole payload
    #[default]
    SealedV1,
    /// base64(AES-128-CTR ciphertext), whole payload, zero counter — unauthenticated
    LegacyCtr,
    /// per-field base64(2-key 3DES-ECB + PKCS#7) — unauthenticated
    LegacyDes,
    // Future:
    // SealedV2 (XChaCha20-Poly1305),
}
