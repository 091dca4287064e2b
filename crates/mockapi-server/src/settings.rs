//! Server settings.
//!
//! Settings are layered: built-in defaults, then an optional config file
//! (`mockapi.{toml,yaml,json}` or the file named by `MOCKAPI_CONFIG`), then
//! environment variables such as `MOCKAPI_SERVER__PORT=9000`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use mockapi_store::RedisConfig;
use mockapi_store::cache::DEFAULT_MEMORY_CAPACITY;
use serde::Deserialize;

/// Environment variable naming an explicit config file.
pub const CONFIG_FILE_ENV: &str = "MOCKAPI_CONFIG";

/// Config file looked up (with any supported extension) when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "mockapi";

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub cache: CacheSettings,
    pub redis: RedisConfig,
    pub metrics: MetricsSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Enables a permissive CORS layer.
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors: true,
        }
    }
}

impl ServerSettings {
    /// Returns the address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Locations of persisted state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// SQLite file holding the `mock_templates` table.
    pub database_path: PathBuf,
    /// Directory holding static file templates such as `payment.json`.
    pub templates_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("db/mock.db"),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

/// Backend used by the response cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Redis,
    Memory,
    None,
}

/// Response cache settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    /// The single cacheable path.
    pub path: String,
    /// TTL en segundos (default: 600 = 10 minutos)
    pub ttl_seconds: u64,
    /// Maximo numero de entries para el backend en memoria.
    pub max_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            path: "/docs".to_string(),
            ttl_seconds: 600,
            max_capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

impl CacheSettings {
    /// Returns the TTL as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

/// Metrics exporter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    pub enabled: bool,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Settings {
    /// Loads settings from the default file location and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(CONFIG_FILE_ENV).ok();
        Self::load_from(file.as_deref().unwrap_or(DEFAULT_CONFIG_FILE))
    }

    /// Loads settings from the given file (optional) and the environment.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("MOCKAPI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Valida que los valores sean utilizables.
    pub fn validate(&self) -> Result<(), String> {
        if self.cache.path.trim().is_empty() {
            return Err("cache.path cannot be empty".to_string());
        }
        if self.cache.ttl_seconds == 0 {
            return Err("cache.ttl_seconds must be greater than zero".to_string());
        }
        if self.server.port == 0 {
            return Err("server.port cannot be zero".to_string());
        }
        Ok(())
    }
}
