// src/lib.rs
//! payload-codec — symmetric payload encryption for web-backend tokens
//!
//! Features:
//! - SealedV1 authenticated envelopes (AES-256-GCM, random salt + nonce)
//! - Decrypt support for two historical wire formats
//! - secure-gate secret aliases throughout
//! - Random token/id helpers

pub mod aliases;
pub mod config;
pub mod consts;
pub mod enums;
pub mod keys;
pub mod legacy;
pub mod payload;
pub mod sealed;
pub mod token;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{Passphrase, SecureConversionsExt};
pub use config::load as load_config;
pub use enums::EnvelopeFormat;
pub use error::CodecError;
pub use payload::Payload;
pub use sealed::{open, seal, PayloadCodec, Result as CodecResult};
