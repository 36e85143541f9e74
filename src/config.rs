//! Application configuration
//!
//! Loaded once at startup: an optional TOML file with environment variable
//! overrides on top. CLI flags override individual values per invocation.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, error, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Spreadsheet file read by the `excel` source and the seeder
    pub workbook_path: String,
    /// SQLite URL backing the `sql` source and the seeder target
    pub database_url: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            workbook_path: "supermarkt_sales.xlsx".to_string(),
            database_url: "sqlite://sales.db?mode=rwc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the dashboard fetches from
    pub api_base_url: String,
    /// Fixed request timeout; any timeout is a terminal failure for the fetch
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5001".to_string(),
            timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    fn load_from_file() -> Self {
        let config_paths = ["salesboard.toml", "config/salesboard.toml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => return config,
                        Err(e) => warn!("Failed to parse config file {}: {}", path, e),
                    },
                    Err(e) => warn!("Failed to read config file {}: {}", path, e),
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    fn override_with_env(&mut self) {
        if let Ok(host) = env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            } else {
                error!("Invalid SERVER_PORT: {}", port);
            }
        }
        if let Ok(path) = env::var("WORKBOOK_PATH") {
            self.data.workbook_path = path;
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            self.data.database_url = url;
        }
        if let Ok(base) = env::var("API_BASE_URL") {
            self.client.api_base_url = base;
        }
        if let Ok(timeout) = env::var("HTTP_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.client.timeout_secs = t;
            } else {
                error!("Invalid HTTP_TIMEOUT_SECS: {}", timeout);
            }
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

/// Install the process-wide configuration. First call wins; later calls are
/// no-ops so tests can initialize freely.
pub fn init_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

/// Process-wide configuration, loading defaults if `init_config` never ran
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}
