//! Picker controller
//!
//! Wires one asset group to a [`SelectionStore`] and answers the questions a
//! grid view and a toolbar strip ask: how many rows, what sits in each cell,
//! is it selected, and what happens when a cell is tapped or a toolbar item
//! is deleted.
//!
//! # Workflow
//!
//! ```text
//! Provider streams assets ─→ grid asks row_count / items_in_row
//!                                 ↓
//!                       user taps a cell
//!                                 ↓
//!                  on_item_tapped(index) → store.toggle
//!                                 ↓
//!           subscribers get SelectionChanged (count + toolbar list)
//! ```
//!
//! Everything here runs on the thread that owns the controller. Background
//! enumeration reaches it only through [`AssetsController::poll_loader`].

use crate::assets::{
    Asset, AssetError, AssetGroup, AssetId, AssetProvider, AssetSlot, GroupLoader, LoadProgress,
};
use crate::grid::{DEFAULT_COLUMNS, GridLayout};
use crate::selection::{SelectionChanged, SelectionError, SelectionStore, SubscriptionId};

/// Controller error type
pub type Result<T> = std::result::Result<T, ControllerError>;

/// Errors reported back to the presentation layer
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Index {index} is outside the group ({count} assets)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Asset at index {0} has not loaded yet")]
    AssetNotReady(usize),
}

/// Construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Maximum simultaneous selections, `None` for unbounded
    pub capacity: Option<usize>,
    /// Thumbnails per grid row
    pub columns: usize,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            capacity: None,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// One grid cell as the view should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Flat index in the group
    pub index: usize,
    /// Asset or loading placeholder
    pub slot: AssetSlot,
    /// Whether to draw the selected badge
    pub selected: bool,
}

/// Controller for one asset group
///
/// # Examples
///
/// ```
/// use asset_picker::{Asset, AssetGroup, AssetId, AssetsController, ControllerOptions, MediaKind};
///
/// let group = AssetGroup::with_assets(
///     "holiday",
///     ["a", "b", "c"]
///         .iter()
///         .map(|id| Asset::new(*id, format!("{id}.jpg"), MediaKind::Photo))
///         .collect(),
/// );
/// let options = ControllerOptions { capacity: None, columns: 2 };
/// let mut controller = AssetsController::new(group, options);
///
/// controller.on_item_tapped(2).unwrap();
/// controller.on_item_tapped(0).unwrap();
///
/// assert_eq!(controller.row_count(), 2);
/// assert!(controller.items_in_row(1)[0].selected);
/// let picked: Vec<_> = controller.finish().into_iter().map(|a| a.id).collect();
/// assert_eq!(picked, vec![AssetId::from("c"), AssetId::from("a")]);
/// ```
#[derive(Debug)]
pub struct AssetsController<P: AssetProvider> {
    provider: P,
    store: SelectionStore,
    layout: GridLayout,
}

impl<P: AssetProvider> AssetsController<P> {
    /// Create a controller with an empty selection
    #[must_use]
    pub fn new(provider: P, options: ControllerOptions) -> Self {
        Self {
            provider,
            store: SelectionStore::with_capacity(options.capacity),
            layout: GridLayout::new(options.columns),
        }
    }

    /// The backing asset provider
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Read-only view of the selection
    #[must_use]
    pub const fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Grid layout in use
    #[must_use]
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Number of assets in the group, loaded or not
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.provider.group_asset_count()
    }

    /// Number of grid rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.layout.row_count(self.item_count())
    }

    /// Cells for one grid row
    #[must_use]
    pub fn items_in_row(&self, row: usize) -> Vec<GridCell> {
        self.layout
            .row_range(row, self.item_count())
            .filter_map(|index| {
                let slot = self.provider.asset_at(index)?;
                let selected = slot
                    .asset()
                    .is_some_and(|asset| self.store.is_selected(&self.provider.identifier_of(asset)));
                Some(GridCell {
                    index,
                    slot,
                    selected,
                })
            })
            .collect()
    }

    /// Whether the asset at a grid index is selected
    ///
    /// Pending and out-of-range indices are never selected.
    #[must_use]
    pub fn is_selected_at(&self, index: usize) -> bool {
        match self.provider.asset_at(index) {
            Some(AssetSlot::Ready(asset)) => self.store.is_selected(&self.provider.identifier_of(&asset)),
            _ => false,
        }
    }

    /// Handle a tap on a grid cell
    ///
    /// Returns the cell's new selected state.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if the index is past the end of the group
    /// - `AssetNotReady` if the asset is still loading
    /// - `Selection(SelectionLimitExceeded)` if the capacity is reached; the
    ///   cell keeps its previous state
    pub fn on_item_tapped(&mut self, index: usize) -> Result<bool> {
        let asset = match self.provider.asset_at(index) {
            Some(AssetSlot::Ready(asset)) => asset,
            Some(AssetSlot::Pending) => return Err(ControllerError::AssetNotReady(index)),
            None => {
                return Err(ControllerError::IndexOutOfRange {
                    index,
                    count: self.item_count(),
                });
            }
        };

        let id = self.provider.identifier_of(&asset);
        Ok(self.store.toggle(&id, &self.provider)?)
    }

    /// Handle deletion of an item from the toolbar strip
    ///
    /// Deselects the asset. Returns whether it was selected.
    pub fn on_toolbar_item_deleted(&mut self, id: &AssetId) -> bool {
        self.store.remove_asset(id, &self.provider)
    }

    /// Register a selection-changed callback
    pub fn subscribe(&mut self, callback: impl FnMut(&SelectionChanged) + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    /// Remove a selection-changed callback
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Selected assets in toolbar order
    #[must_use]
    pub fn selected_assets(&self) -> Vec<Asset> {
        self.store.selected_assets(&self.provider)
    }

    /// Number of selected assets
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Deselect everything
    pub fn clear_selection(&mut self) -> bool {
        self.store.clear(&self.provider)
    }

    /// Drop selected identifiers the group no longer contains
    pub fn reconcile(&mut self) -> Vec<AssetId> {
        self.store.reconcile(&self.provider)
    }

    /// Final selection, after dropping stale entries
    pub fn finish(&mut self) -> Vec<Asset> {
        self.reconcile();
        self.selected_assets()
    }
}

impl AssetsController<AssetGroup> {
    /// Handle an asset disappearing from the group
    ///
    /// Removes it from the group and from the selection in one step.
    pub fn on_asset_removed_from_group(&mut self, id: &AssetId) -> Option<Asset> {
        let removed = self.provider.remove(id);
        self.store.remove_asset(id, &self.provider);
        removed
    }

    /// Apply pages delivered by a background loader
    ///
    /// Call this from the controller's thread whenever convenient. Once the
    /// group is complete, stale selections are reconciled.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::Asset` if the loader failed or disconnected.
    pub fn poll_loader(&mut self, loader: &mut GroupLoader) -> Result<LoadProgress> {
        let progress = loader.drain_into(&mut self.provider)?;
        if progress == LoadProgress::Finished {
            self.reconcile();
        }
        Ok(progress)
    }

    /// Block until a background loader has delivered every page
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::Asset` if the loader failed or disconnected.
    pub fn wait_for_loader(&mut self, loader: &mut GroupLoader) -> Result<()> {
        loader.wait_into(&mut self.provider)?;
        self.reconcile();
        Ok(())
    }
}
