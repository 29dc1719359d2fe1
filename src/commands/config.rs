//! Config command - show or change stored settings

use crate::{
    PickerError,
    cli::ConfigCommands,
    config::PickerConfig,
    output::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, PickerError>;

/// Execute a config subcommand against the config file at `path`
///
/// # Errors
///
/// Returns `PickerError::Config` if the value is invalid or the file cannot
/// be written, and `PickerError::Toml` if the config cannot be rendered.
pub fn execute(
    command: &ConfigCommands,
    mut config: PickerConfig,
    path: &Path,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            out.write(toml::to_string_pretty(&config)?.trim_end());
        }
        ConfigCommands::Path => {
            out.write(&path.display().to_string());
        }
        ConfigCommands::SetMax { max } => {
            config.set_max_selection(*max);
            config.save_to(path)?;
            match max {
                Some(n) => out.success(&format!("Selection limit set to {n}")),
                None => out.success("Selection limit removed"),
            }
        }
        ConfigCommands::SetColumns { columns } => {
            config.set_columns(*columns)?;
            config.save_to(path)?;
            out.success(&format!("Grid columns set to {columns}"));
        }
    }
    Ok(())
}
