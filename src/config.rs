// src/config.rs
use serde::Deserialize;
use std::sync::OnceLock;

/// Global config — loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub keys: Keys,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keys {
    pub passphrase: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    /// Permit `PayloadCodec` to emit legacy envelopes (migration shims only)
    pub allow_legacy_emit: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("PCODEC_CONFIG").unwrap_or_else(|_| "dev-config.toml".to_string());

        let mut conf: Config = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read dev-config.toml");
            toml::from_str(&content).expect("Invalid TOML in dev-config.toml")
        } else {
            eprintln!("Warning: dev-config.toml not found — using built-in defaults");
            Config {
                keys: Keys {
                    passphrase: "dev-codec-passphrase-2025".into(),
                },
                features: Features {
                    allow_legacy_emit: false,
                },
            }
        };

        // Env always beats file — the passphrase is deployment secret material
        if let Ok(passphrase) = std::env::var("PCODEC_PASSPHRASE") {
            conf.keys.passphrase = passphrase;
        }

        // Critical for tests: never allow legacy output no matter what the file says
        if std::env::var("PCODEC_TEST_MODE").is_ok() {
            conf.features.allow_legacy_emit = false;
        }

        conf
    })
}
