// src/config/app.rs
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: Api,
    pub keys: Keys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keys {
    /// PEM RSA public key used to protect outgoing API keys
    pub public_key_pem: Option<String>,
    /// Where the decrypting side keeps the matching private key
    pub private_key_path: String,
}

impl Config {
    /// Configured public key, or `None` with a warning when absent
    pub fn public_key_pem(&self) -> Option<&str> {
        match self.keys.public_key_pem.as_deref() {
            Some(pem) if !pem.trim().is_empty() => Some(pem),
            _ => {
                warn!("no API public key configured");
                None
            }
        }
    }

    /// Join a path onto the API base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("ARMOR_CONFIG").unwrap_or_else(|_| "armor.toml".to_string());

        let mut conf: Config = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read armor.toml");
            toml::from_str(&content).expect("Invalid TOML in armor.toml")
        } else {
            warn!("{config_path} not found — using built-in defaults");
            Config {
                api: default_api(),
                keys: default_keys(),
            }
        };

        // Deployments hand the key over via the environment, not the file
        if let Ok(pem) = std::env::var("ARMOR_PUBLIC_KEY") {
            conf.keys.public_key_pem = Some(pem);
        }

        conf
    })
}
