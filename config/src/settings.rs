//! Application settings management

use crate::PathManager;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STORE_URL_VAR: &str = "SUPABASE_URL";
pub const STORE_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const CATALOG_URL_VAR: &str = "KENNEL_CATALOG_URL";
pub const HOST_VAR: &str = "KENNEL_HOST";
pub const PORT_VAR: &str = "KENNEL_PORT";

pub const DEFAULT_CATALOG_URL: &str = "https://dog.ceo/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Supabase environment variables are missing. Please check your configuration.")]
    MissingStoreCredentials,

    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Connection details for the hosted record store.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub url: String,
    pub anon_key: String,
}

impl std::fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub base_url: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseSettings {
    /// Number of dogs shown on the home page
    pub featured_count: usize,
    /// Number of images shown on a breed page
    pub breed_image_limit: usize,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            featured_count: 6,
            breed_image_limit: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicySetting {
    #[default]
    Refetch,
    Optimistic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    pub max_bulk: usize,
    pub default_bulk: usize,
    pub write_policy: WritePolicySetting,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            max_bulk: 20,
            default_bulk: 5,
            write_policy: WritePolicySetting::Refetch,
        }
    }
}

/// Application settings stored in settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store: StoreSettings,
    pub catalog: CatalogSettings,
    pub server: ServerSettings,
    pub browse: BrowseSettings,
    pub admin: AdminSettings,
}

impl Settings {
    /// Load settings from the default settings file, or return defaults if
    /// there is no file yet.
    pub fn load() -> Result<Self, ConfigError> {
        match PathManager::settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to the default settings file
    pub fn save(&self) -> Result<(), String> {
        let path = PathManager::settings_path().ok_or("Could not determine settings path")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Empty values are
    /// treated as unset.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(STORE_URL_VAR) {
            self.store.url = Some(url);
        }
        if let Some(key) = get(STORE_KEY_VAR) {
            self.store.anon_key = Some(key);
        }
        if let Some(url) = get(CATALOG_URL_VAR) {
            self.catalog.base_url = url;
        }
        if let Some(host) = get(HOST_VAR) {
            self.server.host = host;
        }
        if let Some(port) = get(PORT_VAR) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: PORT_VAR,
                value: port,
            })?;
        }
        Ok(self)
    }

    /// Credentials for the record store. Both the URL and the key must be set.
    pub fn store_credentials(&self) -> Result<StoreCredentials, ConfigError> {
        let url = self.store.url.as_deref().map(str::trim).unwrap_or_default();
        let anon_key = self.store.anon_key.as_deref().map(str::trim).unwrap_or_default();
        if url.is_empty() || anon_key.is_empty() {
            return Err(ConfigError::MissingStoreCredentials);
        }
        Ok(StoreCredentials {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}
