//! Output formatting for CLI display
//!
//! `OutputWriter` abstracts where status messages go (colored stdout for the
//! binary, an in-memory buffer for tests). The free functions format grid rows
//! and the toolbar strip.

use crate::assets::{Asset, AssetSlot};
use crate::controller::GridCell;
use colored::Colorize;
use std::sync::{Arc, Mutex, PoisonError};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use asset_picker::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("[x] 0:beach.jpg  [ ] 1:dunes.jpg");
/// output.warning("You can select at most 2 assets");
/// output.info("Selected: 1/2");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// Info messages are dropped in quiet mode.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Writer that keeps every message in memory
///
/// # Examples
///
/// ```
/// use asset_picker::output::{BufferedWriter, MessageLevel, OutputWriter};
///
/// let output = BufferedWriter::new();
/// output.error("Invalid index: 'x'");
/// assert_eq!(
///     output.messages(),
///     vec![(MessageLevel::Error, "Invalid index: 'x'".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferedWriter {
    messages: Arc<Mutex<Vec<(MessageLevel, String)>>>,
}

impl BufferedWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages written so far
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferedWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

/// Format one asset as a toolbar entry
#[must_use]
pub fn toolbar_entry(position: usize, asset: &Asset) -> String {
    format!("{:>3}. {} ({})", position + 1, asset.name(), asset.kind.label())
}

/// Format the toolbar strip, one line per selected asset
#[must_use]
pub fn format_toolbar(assets: &[Asset], capacity: Option<usize>) -> Vec<String> {
    let header = capacity.map_or_else(
        || format!("Selected: {}", assets.len()),
        |cap| format!("Selected: {}/{cap}", assets.len()),
    );

    std::iter::once(header)
        .chain(assets.iter().enumerate().map(|(i, a)| toolbar_entry(i, a)))
        .collect()
}

/// Format one grid row as `[x] 0:name  [ ] 1:name ...`
#[must_use]
pub fn format_row(cells: &[GridCell]) -> String {
    cells
        .iter()
        .map(|cell| {
            let mark = if cell.selected { "[x]" } else { "[ ]" };
            match &cell.slot {
                AssetSlot::Ready(asset) => format!("{mark} {}:{}", cell.index, asset.name()),
                AssetSlot::Pending => format!("[…] {}:loading", cell.index),
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
