use crate::auth::Credentials;
use crate::engine::Thresholds;
use crate::errors::AppResult;
use crate::messaging::MessagingConfig;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_photo_dir")]
    pub photo_dir: String,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub messaging: MessagingConfig,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_photo_dir() -> String {
    Config::config_dir()
        .join("photos")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            photo_dir: default_photo_dir(),
            credentials: Credentials::default(),
            thresholds: Thresholds::default(),
            messaging: MessagingConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sehatkan")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".sehatkan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sehatkan.conf")
    }

    /// Return the default path of the CSV register
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("health_records.csv")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Keys missing from an older file take their default value.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn photo_path(&self) -> PathBuf {
        expand_tilde(&self.photo_dir)
    }

    /// Initialize configuration file, register directory and photo directory.
    ///
    /// A relative `custom_store` is placed inside the configuration directory.
    pub fn init_all(custom_store: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(name) = custom_store {
            let p = expand_tilde(name);
            config.store = if p.is_absolute() {
                p
            } else {
                dir.join(p)
            }
            .to_string_lossy()
            .to_string();
        }

        // Write config file
        if !is_test {
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = config.store_path().parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
