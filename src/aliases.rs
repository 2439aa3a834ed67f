// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout payload-codec.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt};

// Fixed-size secrets
fixed_alias!(LegacyKey16, 16); // MD5-derived legacy cipher key (AES-128-CTR / 2-key 3DES)
fixed_alias!(SealKey32, 32); // Argon2id-derived AES-256-GCM sealing key

// Dynamic secrets
dynamic_alias!(Passphrase, String); // caller-supplied secret, arbitrary length
