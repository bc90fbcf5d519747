use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::entity::EntityType;
use crate::error::ConfigError;

pub const API_URL_START_KEY: &str = "api_url_start";
pub const API_URL_MIDDLE_KEY: &str = "api_url_middle";

pub const API_KEY_VAR: &str = "API_KEY";
pub const ACCOUNT_NAME_VAR: &str = "ACCOUNT_NAME";
pub const SANDBOX_NAME_VAR: &str = "SANDBOX_NAME";

/// URL fragments and field lists read from the static JSON config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ApiConfig {
    values: HashMap<String, String>,
}

impl ApiConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ApiConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for entity in EntityType::ALL {
            if !config.values.contains_key(&entity.url_end_key()) {
                warn!("Config has no '{}' entry", entity.url_end_key());
            }
        }
        debug!("Config loaded with {} keys", config.values.len());
        Ok(config)
    }

    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ApiConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Secrets identifying the tenant, never stored in the config file.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub api_key: String,
    pub account_name: String,
    pub sandbox_name: String,
}

impl Credentials {
    /// Reads the credentials from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| lookup(name).ok_or(ConfigError::MissingEnv(name));
        Ok(Self {
            api_key: read(API_KEY_VAR)?,
            account_name: read(ACCOUNT_NAME_VAR)?,
            sandbox_name: read(SANDBOX_NAME_VAR)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("account_name", &self.account_name)
            .field("sandbox_name", &self.sandbox_name)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
