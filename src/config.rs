use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per store key
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.data_dir", ".freshbite")?
            .set_default("observability.log_level", default_log_level())?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // FRESHBITE__STORAGE__DATA_DIR, FRESHBITE__OBSERVABILITY__LOG_LEVEL
        builder = builder.add_source(
            Environment::with_prefix("FRESHBITE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(data_dir) = env::var("FRESHBITE_DATA_DIR") {
            builder = builder.set_override("storage.data_dir", data_dir)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err("Storage data_dir must not be empty".to_string());
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Observability log_level must not be empty".to_string());
        }
        Ok(())
    }
}
