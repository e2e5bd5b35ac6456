/// Application configuration
use musichub_catalog::JamendoConfig;
use musichub_state::StateConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "musichub.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Jamendo Client ID is not configured. Please set MUSICHUB_CATALOG__CLIENT_ID or catalog.client_id in musichub.toml.")]
    MissingClientId,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: JamendoConfig,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub browse: StateConfig,

    #[serde(default)]
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AudioSettings {
    /// Play through the default output device; off means playback is only logged
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Linear volume, 0.0 to 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            volume: default_volume(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_volume() -> f32 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://./data/musichub.db".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `musichub.toml`; a missing default file
    /// is fine, a missing explicit file is an error. `MUSICHUB_*` variables
    /// win over the file, with `__` separating nested keys.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path.to_path_buf()).required(true),
            None => config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("MUSICHUB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.client_id.trim().is_empty() {
            return Err(ConfigError::MissingClientId);
        }
        if self.storage.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage.database_url must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(ConfigError::Invalid(
                "audio.volume must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.browse.max_notifications == 0 {
            return Err(ConfigError::Invalid(
                "browse.max_notifications must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
