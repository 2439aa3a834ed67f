// src/legacy/des.rs
//! Per-field two-key 3DES-ECB format
//!
//! Each value is stringified, PKCS#7-padded, encrypted independently and
//! base64-encoded; the output mapping keeps the input's keys. Decrypt hands
//! back the string form of every field — re-parsing typed values is the
//! caller's job, exactly as it was for the producers of this format.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use des::cipher::block_padding::Pkcs7;
use des::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use des::TdesEde2;

use crate::aliases::Passphrase;
use crate::error::CodecError;
use crate::keys::derive_legacy_key;
use crate::payload::{self, Payload};

pub type Result<T> = std::result::Result<T, CodecError>;

/// Encrypt a mapping of scalar fields, value by value
pub fn encrypt_fields(
    passphrase: &Passphrase,
    fields: &Payload,
) -> Result<BTreeMap<String, String>> {
    let key = derive_legacy_key(passphrase);
    let mut encrypted = BTreeMap::new();

    for (name, value) in fields {
        let text = payload::stringify_scalar(name, value)?;
        let ciphertext = ecb::Encryptor::<TdesEde2>::new(key.expose_secret().into())
            .encrypt_padded_vec_mut::<Pkcs7>(text.as_bytes());
        encrypted.insert(name.clone(), STANDARD.encode(ciphertext));
    }

    Ok(encrypted)
}

/// Decrypt a mapping of per-field envelopes back to their string values
pub fn decrypt_fields(
    passphrase: &Passphrase,
    fields: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>> {
    let key = derive_legacy_key(passphrase);
    let mut decrypted = BTreeMap::new();

    for (name, envelope) in fields {
        let ciphertext = STANDARD.decode(envelope)?;
        let padded = ecb::Decryptor::<TdesEde2>::new(key.expose_secret().into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CodecError::Padding)?;
        let text =
            String::from_utf8(padded).map_err(|_| CodecError::MalformedField(name.clone()))?;
        decrypted.insert(name.clone(), text);
    }

    Ok(decrypted)
}
