// src/token.rs
//! Random identifier helpers
//!
//! Uppercase alphanumeric ids, numeric tokens and prefixed reference codes
//! for application code that hands out vouchers, OTPs and record ids.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::consts::{DEFAULT_ID_LEN, DEFAULT_TOKEN_LEN};

/// Random uppercase alphanumeric identifier
pub fn alphanumeric_id(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect()
}

#[inline]
pub fn default_id() -> String {
    alphanumeric_id(DEFAULT_ID_LEN)
}

/// Random numeric token (OTP-style)
pub fn numeric_token(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

#[inline]
pub fn default_token() -> String {
    numeric_token(DEFAULT_TOKEN_LEN)
}

/// `PREFIX-SUFFIX` reference code, always uppercase
pub fn prefixed_code(prefix: &str, len: usize) -> String {
    format!("{}-{}", prefix, alphanumeric_id(len)).to_uppercase()
}
