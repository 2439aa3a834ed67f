// src/sealed.rs
//! SealedV1 — the authenticated envelope format, and the codec front door
//!
//! Envelope layout: base64( salt[16] ‖ nonce[12] ‖ AES-256-GCM ciphertext+tag ).
//! Salt and nonce are freshly random per call, so sealing the same payload
//! twice produces different envelopes, and any bit-flip fails authentication
//! on open.

use std::collections::BTreeMap;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use serde::Serialize;

use crate::aliases::Passphrase;
use crate::consts::{MIN_SEALED_LEN, NONCE_LEN, SALT_LEN};
use crate::error::CodecError;
use crate::keys::{derive_sealed_key, generate_salt};
use crate::legacy;
use crate::payload::{self, Payload};

pub type Result<T> = std::result::Result<T, CodecError>;

/// Seal a payload into a SealedV1 envelope
pub fn seal<T: Serialize>(passphrase: &Passphrase, payload: &T) -> Result<String> {
    let plaintext = payload::to_canonical_bytes(payload)?;

    let salt = generate_salt();
    let key = derive_sealed_key(passphrase, &salt)?;
    let cipher = Aes256Gcm::new(key.expose_secret().into());

    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_slice())
        .expect("AES-GCM encryption of an in-memory buffer cannot fail");

    let mut raw = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    raw.extend_from_slice(&salt);
    raw.extend_from_slice(&nonce);
    raw.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(raw))
}

/// Open a SealedV1 envelope back into a payload mapping
pub fn open(passphrase: &Passphrase, envelope: &str) -> Result<Payload> {
    let raw = STANDARD.decode(envelope)?;
    if raw.len() < MIN_SEALED_LEN {
        return Err(CodecError::Truncated {
            expected: MIN_SEALED_LEN,
            actual: raw.len(),
        });
    }

    let salt: [u8; SALT_LEN] = raw[..SALT_LEN].try_into().expect("length checked above");
    let key = derive_sealed_key(passphrase, &salt)?;
    let cipher = Aes256Gcm::new(key.expose_secret().into());

    let nonce = Nonce::from_slice(&raw[SALT_LEN..SALT_LEN + NONCE_LEN]);
    let plaintext = cipher
        .decrypt(nonce, &raw[SALT_LEN + NONCE_LEN..])
        .map_err(|_| CodecError::Verification)?;

    payload::from_bytes(&plaintext)
}

/// The codec front door — carries an injected passphrase so call sites never
/// reach into ambient process state at encrypt/decrypt time.
///
/// Decrypts all three understood formats; emits only SealedV1 unless legacy
/// output is explicitly enabled (migration shims only).
pub struct PayloadCodec {
    passphrase: Passphrase,
    allow_legacy_emit: bool,
}

impl PayloadCodec {
    pub fn new(passphrase: Passphrase) -> Self {
        Self {
            passphrase,
            allow_legacy_emit: false,
        }
    }

    /// Build from process-wide configuration (loads it on first use)
    pub fn from_config() -> Self {
        let config = crate::config::load();
        Self {
            passphrase: Passphrase::new(config.keys.passphrase.clone()),
            allow_legacy_emit: config.features.allow_legacy_emit,
        }
    }

    pub fn with_legacy_emit(mut self, allow: bool) -> Self {
        self.allow_legacy_emit = allow;
        self
    }

    pub fn seal<T: Serialize>(&self, payload: &T) -> Result<String> {
        seal(&self.passphrase, payload)
    }

    pub fn open(&self, envelope: &str) -> Result<Payload> {
        open(&self.passphrase, envelope)
    }

    pub fn decrypt_legacy_ctr(&self, envelope: &str) -> Result<Payload> {
        legacy::ctr::decrypt_payload(&self.passphrase, envelope)
    }

    pub fn decrypt_legacy_des(
        &self,
        fields: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>> {
        legacy::des::decrypt_fields(&self.passphrase, fields)
    }

    pub fn encrypt_legacy_ctr<T: Serialize>(&self, payload: &T) -> Result<String> {
        if !self.allow_legacy_emit {
            return Err(CodecError::LegacyEmitDisabled);
        }
        legacy::ctr::encrypt_payload(&self.passphrase, payload)
    }

    pub fn encrypt_legacy_des(&self, fields: &Payload) -> Result<BTreeMap<String, String>> {
        if !self.allow_legacy_emit {
            return Err(CodecError::LegacyEmitDisabled);
        }
        legacy::des::encrypt_fields(&self.passphrase, fields)
    }
}
