//! asset-picker - multi-select over a group of media assets
//!
//! This library keeps the selection state for a picker view: which assets of
//! a group are selected, the order they were selected in (for a toolbar
//! strip), and the grid queries a view needs while the group is still
//! loading.

use thiserror::Error;

pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod grid;
pub mod output;
pub mod selection;

#[cfg(test)]
pub mod testing;

pub use assets::{Asset, AssetGroup, AssetId, AssetProvider, AssetSlot, MediaFilter, MediaKind};
pub use controller::{AssetsController, ControllerError, ControllerOptions, GridCell};
pub use selection::{SelectionChange, SelectionChanged, SelectionError, SelectionStore};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickerError {
    /// Asset enumeration error
    #[error("Asset error: {0}")]
    Asset(#[from] assets::AssetError),
    /// Controller error
    #[error("{0}")]
    Controller(#[from] ControllerError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Config could not be rendered as TOML
    #[error("Failed to render config: {0}")]
    Toml(#[from] toml::ser::Error),
    /// Selection could not be rendered as JSON
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
