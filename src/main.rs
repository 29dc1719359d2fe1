//! asset-picker CLI entry point
//!
//! Treats a directory of images and videos as an asset group and lets the
//! user pick an ordered subset of it.
//!
//! # Usage
//!
//! ```bash
//! # Show a folder as a grid
//! asset-picker list ~/Pictures/Holiday
//!
//! # Pick interactively (tap <index>, delete <id>, rows, list, done, quit)
//! asset-picker pick ~/Pictures/Holiday --max 5
//!
//! # Pick non-interactively and print JSON
//! asset-picker pick ~/Pictures/Holiday --tap 0 3 7 --json
//!
//! # Persist defaults
//! asset-picker config set-max 10
//! asset-picker config set-columns 6
//! ```
//!
//! # Logging
//!
//! Set `RUST_LOG=debug` to trace selection changes and loader pages.

use asset_picker::{
    PickerError,
    cli::{Cli, Commands},
    commands::{self, pick::PickArgs},
    config::PickerConfig,
    output::StdoutWriter,
};
use std::io;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, PickerError>;

fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => PickerConfig::config_path()?,
    };
    let config = PickerConfig::load_from(&config_path)?;
    let out = StdoutWriter::new(cli.quiet || config.quiet);

    match &cli.command {
        Commands::List { group } => commands::list(group, &config, &out),
        Commands::Pick {
            group,
            max,
            taps,
            json,
        } => {
            let args = PickArgs {
                max: *max,
                taps: taps.clone(),
                json: *json,
            };
            commands::pick(group, &args, &config, io::stdin().lock(), &out).map(|_| ())
        }
        Commands::Config { command } => commands::config(command, config, &config_path, &out),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
