// src/keys.rs
//! Key derivation — legacy MD5 digest and modern Argon2id paths
//!
//! Derived keys are computed fresh on every call from the passphrase;
//! nothing is cached and no key material survives the call that made it.

use argon2::Argon2;
use md5::{Digest, Md5};
use rand::RngCore;

use crate::aliases::{LegacyKey16, Passphrase, SealKey32};
use crate::consts::{SALT_LEN, SEAL_KEY_LEN};
use crate::error::CodecError;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Derive the 16-byte legacy cipher key: the binary MD5 digest of the passphrase.
///
/// Deterministic — same passphrase, same key, always. Kept ONLY so envelopes
/// produced by earlier deployments stay decryptable; MD5 is far too weak for
/// any new format. An empty passphrase is accepted (the digest is defined)
/// but yields a key with no secret entropy — callers own that precondition.
pub fn derive_legacy_key(passphrase: &Passphrase) -> LegacyKey16 {
    let digest = Md5::digest(passphrase.expose_secret().as_bytes());
    LegacyKey16::new(digest.into())
}

/// Derive the 32-byte SealedV1 key with Argon2id over passphrase + salt.
///
/// The salt is random per envelope and travels in the envelope itself, so
/// decrypt recovers it without any key store.
pub fn derive_sealed_key(passphrase: &Passphrase, salt: &[u8; SALT_LEN]) -> Result<SealKey32> {
    let mut key = [0u8; SEAL_KEY_LEN];
    Argon2::default()
        .hash_password_into(passphrase.expose_secret().as_bytes(), salt, &mut key)
        .map_err(|e| CodecError::KeyDerivation(e.to_string()))?;
    Ok(SealKey32::new(key))
}

/// Fresh random Argon2id salt for one SealedV1 envelope
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
