// src/consts.rs
//! Shared constants — cipher geometry and defaults

/// Legacy key length: MD5 digest size, doubles as the AES-128 key size
/// and the two-key 3DES key size
pub const LEGACY_KEY_LEN: usize = 16;

/// SealedV1 key length (AES-256)
pub const SEAL_KEY_LEN: usize = 32;

/// Argon2id salt embedded at the front of every SealedV1 envelope
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length
pub const TAG_LEN: usize = 16;

/// Smallest possible SealedV1 envelope (salt + nonce + tag, empty ciphertext)
pub const MIN_SEALED_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// 3DES block size — PKCS#7 pads up to this
pub const DES_BLOCK_LEN: usize = 8;

/// Fixed initial counter block for the legacy CTR format.
// Every historical envelope was produced with a zeroed counter, so decrypt
// must restart from zero too.
pub const ZERO_COUNTER: [u8; 16] = [0u8; 16];

/// Default number of characters in a random id
pub const DEFAULT_ID_LEN: usize = 10;

/// Default number of digits in a random numeric token
pub const DEFAULT_TOKEN_LEN: usize = 8;
