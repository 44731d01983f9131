use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub static CONFIG: Lazy<Arc<Config>> = Lazy::new(|| {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, falling back to defaults: {e}");
        Config::default()
    });
    Arc::new(config)
});

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not write default config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root address of the hosted table service, e.g. `https://xyz.example.co`.
    #[serde(default)]
    pub store_url: String,
    /// Public access key. Sent both as `apikey` and as a bearer token.
    #[serde(default)]
    pub store_anon_key: String,
    #[serde(default = "default_documents_table")]
    pub documents_table: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Config {
    /// Reads `config.toml`, then warns if the store address or key is still blank.
    ///
    /// Browser builds see the copy baked in at compile time. Server builds read the file
    /// at startup (writing the defaults first if it's gone), and a
    /// `STORE_URL` or `STORE_ANON_KEY` in the environment wins over what the file says.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(feature = "server"))]
        let config_str = include_str!("../../config.toml").to_string();
        #[cfg(feature = "server")]
        let config_str = {
            let config_path = std::path::PathBuf::from("config.toml");
            if !config_path.exists() {
                let s: String = toml::to_string(&Self::default())?;
                std::fs::write(&config_path, s.as_bytes())?;
            }
            std::fs::read_to_string(&config_path)?
        };

        let config = Self::parse(&config_str)?;

        #[cfg(feature = "server")]
        let config = config.with_env_overrides(|key| std::env::var(key).ok());

        config.warn_if_incomplete();
        Ok(config)
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var("STORE_URL") {
            self.store_url = url;
        }
        if let Some(key) = var("STORE_ANON_KEY") {
            self.store_anon_key = key;
        }
        self
    }

    pub fn has_store_url(&self) -> bool {
        !self.store_url.trim().is_empty()
    }

    pub fn has_store_key(&self) -> bool {
        !self.store_anon_key.trim().is_empty()
    }

    /// Missing credentials don't stop anything, every query will just fail later on.
    pub fn warn_if_incomplete(&self) -> bool {
        let complete = self.has_store_url() && self.has_store_key();
        if !complete {
            tracing::warn!(
                url = self.has_store_url(),
                key = self.has_store_key(),
                "document store credentials missing!"
            );
        }
        complete
    }
}

fn default_documents_table() -> String {
    "legal_documents".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_url: String::new(),
            store_anon_key: String::new(),
            documents_table: default_documents_table(),
            bind_address: default_bind_address(),
        }
    }
}
