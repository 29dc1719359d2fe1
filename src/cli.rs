//! Command-line interface definitions and parsing
//!
//! Defines the CLI structure for asset-picker using the `clap` crate, plus the
//! small line protocol used by the interactive `pick` session.
//!
//! # Commands
//!
//! - **list**: print a directory's assets as grid rows
//! - **pick**: select assets from a directory, interactively or with `--tap`
//! - **config**: show or change stored settings

use crate::assets::{AssetId, MediaFilter};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Media filter as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterArg {
    /// Photos and videos
    All,
    /// Still images only
    Photos,
    /// Videos only
    Videos,
}

impl From<FilterArg> for MediaFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Photos => Self::Photos,
            FilterArg::Videos => Self::Videos,
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "asset-picker")]
#[command(about = "Pick media assets from a group with an ordered selection toolbar", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Shared options for commands that open an asset group
#[derive(clap::Args, Debug, Clone)]
pub struct GroupArgs {
    /// Directory holding the group's media files
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Which media kinds to show (overrides config)
    #[arg(long = "filter", value_enum)]
    pub filter: Option<FilterArg>,

    /// Thumbnails per grid row (overrides config)
    #[arg(short = 'c', long = "columns", value_name = "N")]
    pub columns: Option<usize>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the group's assets as grid rows
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        group: GroupArgs,
    },

    /// Select assets from a group
    #[command(visible_alias = "p")]
    Pick {
        #[command(flatten)]
        group: GroupArgs,

        /// Maximum number of selected assets (overrides config)
        #[arg(short = 'm', long = "max", value_name = "N")]
        max: Option<usize>,

        /// Tap these grid indices instead of reading commands from stdin
        #[arg(short = 't', long = "tap", value_name = "INDEX", num_args = 1..)]
        taps: Vec<usize>,

        /// Print the final selection as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Print the config file location
    Path,

    /// Set the selection limit (omit N to remove it)
    #[command(name = "set-max")]
    SetMax {
        #[arg(value_name = "N")]
        max: Option<usize>,
    },

    /// Set the number of grid columns
    #[command(name = "set-columns")]
    SetColumns {
        #[arg(value_name = "N")]
        columns: usize,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// One line of input in an interactive pick session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickCommand {
    /// Toggle the asset at a grid index
    Tap(usize),
    /// Remove an asset from the toolbar
    Delete(AssetId),
    /// Print the grid
    Rows,
    /// Print the toolbar
    List,
    /// Deselect everything
    Clear,
    /// Print the help text
    Help,
    /// Accept the selection and exit
    Done,
    /// Abandon the selection and exit
    Quit,
}

/// Help text for the interactive session
pub const PICK_HELP: &[(&str, &str)] = &[
    ("tap <index>", "select or deselect the asset at a grid index"),
    ("delete <id>", "remove an asset from the toolbar"),
    ("rows", "show the grid"),
    ("list", "show the toolbar"),
    ("clear", "deselect everything"),
    ("done", "accept the selection"),
    ("quit", "exit without a selection"),
];

impl PickCommand {
    /// Parse one input line
    ///
    /// A bare number is shorthand for `tap <number>`.
    ///
    /// # Errors
    ///
    /// Returns a message describing the problem for unknown commands or
    /// missing/invalid arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Err("Empty command".to_string());
        }
        // The argument is kept verbatim, ids are paths and may contain spaces
        let (word, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim_start()));

        let parse_index = |s: &str| {
            s.parse::<usize>()
                .map_err(|_| format!("Invalid index: '{s}'"))
        };

        match word.to_lowercase().as_str() {
            "tap" | "t" if arg.is_empty() => Err("Usage: tap <index>".to_string()),
            "tap" | "t" => parse_index(arg).map(Self::Tap),
            "delete" | "d" | "rm" if arg.is_empty() => Err("Usage: delete <id>".to_string()),
            "delete" | "d" | "rm" => Ok(Self::Delete(AssetId::new(arg))),
            "rows" | "r" => Ok(Self::Rows),
            "list" | "ls" | "l" => Ok(Self::List),
            "clear" => Ok(Self::Clear),
            "help" | "h" | "?" => Ok(Self::Help),
            "done" | "ok" => Ok(Self::Done),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => other
                .parse::<usize>()
                .map(Self::Tap)
                .map_err(|_| format!("Unknown command: '{word}' (try 'help')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pick_with_taps() {
        let cli = Cli::try_parse_from([
            "asset-picker", "pick", "photos", "--max", "2", "--tap", "0", "3", "--filter", "videos",
        ])
        .unwrap();

        match cli.command {
            Commands::Pick { group, max, taps, json } => {
                assert_eq!(group.dir, PathBuf::from("photos"));
                assert_eq!(group.filter, Some(FilterArg::Videos));
                assert_eq!(max, Some(2));
                assert_eq!(taps, vec![0, 3]);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["asset-picker", "ls", "dir", "-q", "--config", "c.toml"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_parse_config_set_max_without_value() {
        let cli = Cli::try_parse_from(["asset-picker", "config", "set-max"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::SetMax { max: None }
            }
        ));
    }

    #[test]
    fn test_filter_arg_conversion() {
        assert_eq!(MediaFilter::from(FilterArg::Photos), MediaFilter::Photos);
        assert_eq!(MediaFilter::from(FilterArg::All), MediaFilter::All);
    }

    #[test]
    fn test_pick_command_parse() {
        assert_eq!(PickCommand::parse("tap 3"), Ok(PickCommand::Tap(3)));
        assert_eq!(PickCommand::parse("  7 "), Ok(PickCommand::Tap(7)));
        assert_eq!(
            PickCommand::parse("delete /photos/my beach.jpg"),
            Ok(PickCommand::Delete(AssetId::from("/photos/my beach.jpg")))
        );
        assert_eq!(
            PickCommand::parse("delete   /p/my  beach.jpg\n"),
            Ok(PickCommand::Delete(AssetId::from("/p/my  beach.jpg")))
        );
        assert_eq!(PickCommand::parse("t\t12"), Ok(PickCommand::Tap(12)));
        assert_eq!(PickCommand::parse("ROWS"), Ok(PickCommand::Rows));
        assert_eq!(PickCommand::parse("done"), Ok(PickCommand::Done));
        assert_eq!(PickCommand::parse("q"), Ok(PickCommand::Quit));
    }

    #[test]
    fn test_pick_command_errors() {
        assert!(PickCommand::parse("").is_err());
        assert!(PickCommand::parse("tap").is_err());
        assert!(PickCommand::parse("tap x").is_err());
        assert!(PickCommand::parse("delete").is_err());
        assert!(PickCommand::parse("frobnicate").unwrap_err().contains("Unknown command"));
    }
}
