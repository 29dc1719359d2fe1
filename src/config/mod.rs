//! Configuration module for asset-picker
//!
//! Manages picker settings: selection limit, grid columns, media filter and
//! loader page size. Configuration is stored in the user's config directory
//! unless an explicit path is given.

use crate::assets::MediaFilter;
use crate::controller::ControllerOptions;
use crate::grid::DEFAULT_COLUMNS;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of assets per loader page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PickerConfig {
    /// Maximum number of simultaneous selections (unbounded when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selection: Option<usize>,

    /// Thumbnails per grid row
    pub columns: usize,

    /// Which media kinds to show
    pub filter: MediaFilter,

    /// Assets per page delivered by the background loader
    pub page_size: usize,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_selection: None,
            columns: DEFAULT_COLUMNS,
            filter: MediaFilter::All,
            page_size: DEFAULT_PAGE_SIZE,
            quiet: false,
        }
    }
}

impl PickerConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("asset-picker").join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the selection limit (`None` removes it)
    pub const fn set_max_selection(&mut self, max: Option<usize>) {
        self.max_selection = max;
    }

    /// Set the number of grid columns
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `columns` is zero.
    pub fn set_columns(&mut self, columns: usize) -> Result<(), ConfigError> {
        if columns == 0 {
            return Err(ConfigError::Message("Columns must be at least 1".to_string()));
        }
        self.columns = columns;
        Ok(())
    }

    /// Controller options derived from this configuration
    #[must_use]
    pub const fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            capacity: self.max_selection,
            columns: self.columns,
        }
    }
}
