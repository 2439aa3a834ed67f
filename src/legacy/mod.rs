// src/legacy/mod.rs
//! Historical wire formats
//!
//! Neither format authenticates its ciphertext, and both derive their key
//! with MD5 — they exist so envelopes produced by earlier deployments stay
//! decryptable. New envelopes should always be SealedV1.

pub mod ctr;
pub mod des;
