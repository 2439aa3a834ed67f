// src/bin/reseal_batch.rs
//! Batch Reseal — migrate a manifest of legacy envelopes to SealedV1

use anyhow::{bail, Context, Result};
use chrono::Utc;
use payload_codec::aliases::Passphrase;
use payload_codec::enums::EnvelopeFormat;
use payload_codec::payload::Payload;
use payload_codec::{legacy, sealed};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct Manifest {
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    name: String,
    format: EnvelopeFormat,
    #[serde(default)]
    envelope: Option<String>,
    #[serde(default)]
    fields: Option<BTreeMap<String, String>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: reseal-batch <manifest.json> <output.json>";
    let input = args.next().context(usage)?;
    let output = args.next().context(usage)?;

    let config = payload_codec::load_config();
    let passphrase = Passphrase::new(config.keys.passphrase.clone());

    info!("payload-codec — Batch Reseal");

    let manifest: Manifest = serde_json::from_str(
        &std::fs::read_to_string(&input).with_context(|| format!("read {input}"))?,
    )
    .context("parse manifest")?;

    let mut resealed_count = 0;
    let mut passthrough_count = 0;
    let mut failed_count = 0;
    let mut out_entries = Vec::new();

    for entry in manifest.entries {
        // Already-modern entries pass through untouched
        if entry.format == EnvelopeFormat::SealedV1 {
            passthrough_count += 1;
            out_entries.push(json!({
                "name": entry.name,
                "format": EnvelopeFormat::SealedV1,
                "envelope": entry.envelope,
            }));
            continue;
        }

        let payload = match recover_payload(&passphrase, &entry) {
            Ok(payload) => payload,
            Err(e) => {
                failed_count += 1;
                warn!("FAILED {} — {e}", entry.name);
                continue;
            }
        };

        let envelope = sealed::seal(&passphrase, &payload)?;
        resealed_count += 1;
        info!("RESEALED {} ({:?} → SealedV1)", entry.name, entry.format);

        out_entries.push(json!({
            "name": entry.name,
            "format": EnvelopeFormat::SealedV1,
            "envelope": envelope,
        }));
    }

    let report = json!({
        "resealed_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "resealer_version": env!("CARGO_PKG_VERSION"),
        "total_entries": out_entries.len(),
        "entries": out_entries,
    });

    std::fs::write(&output, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("write {output}"))?;

    println!("\n=== BATCH COMPLETE ===");
    println!("Resealed: {resealed_count}");
    println!("Passed through: {passthrough_count}");
    println!("Failed: {failed_count}");
    if failed_count == 0 {
        println!("All legacy envelopes migrated.");
    }

    Ok(())
}

/// Decrypt one legacy entry into a payload mapping ready for resealing
fn recover_payload(passphrase: &Passphrase, entry: &Entry) -> Result<Payload> {
    match entry.format {
        EnvelopeFormat::LegacyCtr => {
            let envelope = entry
                .envelope
                .as_deref()
                .context("legacy-ctr entry is missing its envelope")?;
            Ok(legacy::ctr::decrypt_payload(passphrase, envelope)?)
        }
        EnvelopeFormat::LegacyDes => {
            let fields = entry
                .fields
                .as_ref()
                .context("legacy-des entry is missing its fields")?;
            let decrypted = legacy::des::decrypt_fields(passphrase, fields)?;
            // Per-field values come back as strings; keep them that way
            Ok(decrypted
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect())
        }
        _ => bail!("unsupported source format {:?}", entry.format),
    }
}
