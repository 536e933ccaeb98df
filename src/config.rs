use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the persisted key-value blobs.
    pub dir: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: ".neighbour-aid".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from multiple sources in priority order:
    /// 1. Built-in defaults
    /// 2. NeighbourAid.toml (base configuration file)
    /// 3. Environment variables (prefixed with NEIGHBOURAID_)
    pub fn load() -> Result<Self, figment::Error> {
        let defaults = toml::to_string(&Config::default()).unwrap_or_default();
        let figment = Figment::new()
            .merge(Toml::string(&defaults).nested())
            .merge(Toml::file("NeighbourAid.toml").nested())
            .merge(Env::prefixed("NEIGHBOURAID_").split("_"));

        figment.extract()
    }
}
