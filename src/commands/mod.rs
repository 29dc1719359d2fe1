//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and the loaded configuration.

pub mod config;
pub mod list;
pub mod pick;

use crate::assets::MediaFilter;
use crate::cli::GroupArgs;
use crate::config::PickerConfig;
use crate::controller::ControllerOptions;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use list::execute as list;
pub use pick::execute as pick;

/// Media filter from the command line, falling back to config
fn effective_filter(group: &GroupArgs, config: &PickerConfig) -> MediaFilter {
    group.filter.map_or(config.filter, MediaFilter::from)
}

/// Controller options from config with command-line overrides applied
fn effective_options(group: &GroupArgs, max: Option<usize>, config: &PickerConfig) -> ControllerOptions {
    let defaults = config.controller_options();
    ControllerOptions {
        capacity: max.or(defaults.capacity),
        columns: group.columns.unwrap_or(defaults.columns),
    }
}
