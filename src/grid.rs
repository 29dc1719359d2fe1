//! Grid row arithmetic
//!
//! Assets are shown as rows of `columns` thumbnails. These helpers map
//! between flat group indices and rows; the last row may be partial.

use std::ops::Range;

/// Default thumbnails per row
pub const DEFAULT_COLUMNS: usize = 4;

/// Row layout of a thumbnail grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
}

impl GridLayout {
    /// Create a layout; `columns` is clamped to at least 1
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    /// Thumbnails per row
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows needed for `item_count` items
    #[must_use]
    pub const fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.columns)
    }

    /// Flat indices shown in `row`
    ///
    /// Empty when the row is past the end.
    #[must_use]
    pub fn row_range(&self, row: usize, item_count: usize) -> Range<usize> {
        let start = row.saturating_mul(self.columns).min(item_count);
        let end = start.saturating_add(self.columns).min(item_count);
        start..end
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}
