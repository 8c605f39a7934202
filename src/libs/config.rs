//! Configuration management for the application.
//!
//! Settings are stored as JSON (`config.json`) in the platform data directory
//! resolved by [`DataStorage`]. A missing file is not an error: the defaults
//! are used, so a fresh installation runs without any setup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use schejzuren::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.database_path()?;
//! # Ok::<(), schejzuren::libs::error::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::error::Result;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_success};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "schejzuren.db";

fn default_database_file() -> String {
    DB_FILE_NAME.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Database file. Relative names resolve inside the data directory;
    /// absolute paths are used as-is.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Default `tracing` filter directive for the binary, used when
    /// `RUST_LOG` is not set (e.g. `"schejzuren=debug"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_file: default_database_file(),
            log_filter: None,
        }
    }
}

impl Config {
    /// Read the configuration from the data directory, or defaults when absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            msg_debug!(Message::ConfigFileNotFound(path.display().to_string()));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        msg_success!(Message::ConfigSaved(path.display().to_string()));
        Ok(())
    }

    /// Resolved database path.
    pub fn database_path(&self) -> Result<PathBuf> {
        self.database_path_in(&DataStorage::new())
    }

    pub fn database_path_in(&self, storage: &DataStorage) -> Result<PathBuf> {
        let file = Path::new(&self.database_file);
        if file.is_absolute() {
            return Ok(file.to_path_buf());
        }
        Ok(storage.get_path(&self.database_file)?)
    }
}
