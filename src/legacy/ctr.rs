// src/legacy/ctr.rs
//! Whole-payload AES-128-CTR format
//!
//! Key = MD5 digest of the passphrase, counter restarts at zero for every
//! envelope. Identical payloads therefore produce identical envelopes, and
//! a successful JSON parse on decrypt is the only integrity check — wrong
//! key, corruption, and tampering all surface as `MalformedPayload` (or,
//! rarely, as a silently different payload).

use aes::Aes128;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ctr::cipher::{KeyIvInit, StreamCipher};
use serde::Serialize;

use crate::aliases::Passphrase;
use crate::consts::ZERO_COUNTER;
use crate::error::CodecError;
use crate::keys::derive_legacy_key;
use crate::payload::{self, Payload};

pub type Result<T> = std::result::Result<T, CodecError>;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// Encrypt a payload into a legacy CTR envelope
pub fn encrypt_payload<T: Serialize>(passphrase: &Passphrase, payload: &T) -> Result<String> {
    let mut buf = payload::to_canonical_bytes(payload)?;
    apply_keystream(passphrase, &mut buf);
    Ok(STANDARD.encode(buf))
}

/// Decrypt a legacy CTR envelope back into a payload mapping
pub fn decrypt_payload(passphrase: &Passphrase, envelope: &str) -> Result<Payload> {
    let mut buf = STANDARD.decode(envelope)?;
    apply_keystream(passphrase, &mut buf);
    payload::from_bytes(&buf)
}

// One fresh keystream per call; no cipher state survives
fn apply_keystream(passphrase: &Passphrase, buf: &mut [u8]) {
    let key = derive_legacy_key(passphrase);
    let mut cipher = Aes128Ctr::new(key.expose_secret().into(), (&ZERO_COUNTER).into());
    cipher.apply_keystream(buf);
}
