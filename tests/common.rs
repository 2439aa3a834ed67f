// tests/common.rs
//! Shared test utilities — logging setup and payload fixtures

use payload_codec::aliases::Passphrase;
use payload_codec::payload::Payload;
use serde_json::json;

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Force info-level logging even if RUST_LOG is not set
#[allow(dead_code)]
pub fn setup_info() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::new("info"))
        .try_init()
        .ok();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

#[allow(dead_code)]
pub fn passphrase(secret: &str) -> Passphrase {
    Passphrase::new(secret.to_owned())
}

/// The canonical session payload used throughout the suite
#[allow(dead_code)]
pub fn sample_payload() -> Payload {
    let mut payload = Payload::new();
    payload.insert("user_id".into(), json!(42));
    payload.insert("role".into(), json!("admin"));
    payload
}

/// A deeper payload with every JSON value kind
#[allow(dead_code)]
pub fn nested_payload() -> Payload {
    let mut payload = Payload::new();
    payload.insert("account".into(), json!({"id": 7, "tags": ["a", "b"]}));
    payload.insert("active".into(), json!(true));
    payload.insert("balance".into(), json!(1050.25));
    payload.insert("note".into(), json!(null));
    payload
}
