//! Canonical selection state for one asset group
//!
//! `SelectionStore` keeps two views of the same selection: a set for
//! membership tests and an ordered list for the toolbar strip. Both are
//! private and only change together, inside one of the mutation methods.
//!
//! The store holds identifiers only. Operations that need real assets
//! (resolving the toolbar list, building notifications) take the group's
//! [`AssetProvider`] as an argument.

use super::error::{Result, SelectionError};
use super::events::{SelectionChange, SelectionChanged, SubscriptionId, Subscribers};
use crate::assets::{Asset, AssetId, AssetProvider};
use std::collections::HashSet;

/// Selection set plus toolbar order, with an optional capacity
///
/// # Examples
///
/// ```
/// use asset_picker::{Asset, AssetGroup, AssetId, MediaKind, SelectionError, SelectionStore};
///
/// let group = AssetGroup::with_assets(
///     "holiday",
///     vec![
///         Asset::new("a", "a.jpg", MediaKind::Photo),
///         Asset::new("b", "b.mov", MediaKind::Video),
///     ],
/// );
/// let mut store = SelectionStore::with_capacity(Some(1));
///
/// assert!(store.toggle(&AssetId::from("b"), &group).unwrap());
/// assert_eq!(
///     store.toggle(&AssetId::from("a"), &group),
///     Err(SelectionError::SelectionLimitExceeded { capacity: 1 })
/// );
/// assert_eq!(store.selected_assets(&group)[0].kind, MediaKind::Video);
/// ```
#[derive(Debug, Default)]
pub struct SelectionStore {
    selected: HashSet<AssetId>,
    toolbar_order: Vec<AssetId>,
    capacity: Option<usize>,
    subscribers: Subscribers,
}

impl SelectionStore {
    /// Create an empty, unbounded store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that accepts at most `capacity` selections
    ///
    /// `None` means unbounded.
    #[must_use]
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Configured maximum number of selections
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// How many more assets can be selected, `None` if unbounded
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        self.capacity.map(|cap| cap.saturating_sub(self.count()))
    }

    /// Number of selected assets
    #[must_use]
    pub fn count(&self) -> usize {
        debug_assert_eq!(self.selected.len(), self.toolbar_order.len());
        self.toolbar_order.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toolbar_order.is_empty()
    }

    /// Whether an asset is currently selected
    #[must_use]
    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.selected.contains(id)
    }

    /// Selected identifiers in selection order
    #[must_use]
    pub fn ids(&self) -> &[AssetId] {
        &self.toolbar_order
    }

    /// Flip the selection state of one asset
    ///
    /// Selecting appends to the toolbar list; deselecting removes from it.
    /// Returns the new state (`true` = selected). Subscribers are notified on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::SelectionLimitExceeded` when selecting would
    /// exceed the capacity, and `SelectionError::UnknownAsset` when a fully
    /// loaded provider cannot resolve `id`. The store is left unchanged.
    pub fn toggle<P: AssetProvider + ?Sized>(&mut self, id: &AssetId, provider: &P) -> Result<bool> {
        let change = if self.selected.remove(id) {
            self.toolbar_order.retain(|existing| existing != id);
            log::debug!("Deselected {id} ({} selected)", self.count());
            SelectionChange::Deselected(id.clone())
        } else {
            // Ids may still be arriving while the group loads
            if provider.is_complete() && provider.find(id).is_none() {
                log::info!("Refusing to select {id}: not in the group");
                return Err(SelectionError::UnknownAsset(id.clone()));
            }
            if let Some(capacity) = self.capacity
                && self.toolbar_order.len() >= capacity
            {
                log::info!("Refusing to select {id}: limit of {capacity} reached");
                return Err(SelectionError::SelectionLimitExceeded { capacity });
            }
            self.selected.insert(id.clone());
            self.toolbar_order.push(id.clone());
            log::debug!("Selected {id} ({} selected)", self.count());
            SelectionChange::Selected(id.clone())
        };

        let now_selected = matches!(change, SelectionChange::Selected(_));
        self.notify(change, provider);
        Ok(now_selected)
    }

    /// Drop an asset from the selection, whether or not it was selected
    ///
    /// Used when the asset left the group or was deleted from the toolbar.
    /// Returns whether anything changed; subscribers are only notified then.
    pub fn remove_asset<P: AssetProvider + ?Sized>(&mut self, id: &AssetId, provider: &P) -> bool {
        if !self.selected.remove(id) {
            return false;
        }
        self.toolbar_order.retain(|existing| existing != id);
        log::debug!("Removed {id} from selection ({} selected)", self.count());

        self.notify(SelectionChange::Removed(id.clone()), provider);
        true
    }

    /// Deselect everything
    ///
    /// Returns whether anything was selected.
    pub fn clear<P: AssetProvider + ?Sized>(&mut self, provider: &P) -> bool {
        if self.is_empty() {
            return false;
        }
        self.selected.clear();
        self.toolbar_order.clear();

        self.notify(SelectionChange::Cleared, provider);
        true
    }

    /// Drop identifiers the provider can no longer resolve
    ///
    /// Does nothing while the provider is still loading, since a missing
    /// asset may simply not have arrived yet. Returns the removed ids in
    /// toolbar order.
    pub fn reconcile<P: AssetProvider + ?Sized>(&mut self, provider: &P) -> Vec<AssetId> {
        if !provider.is_complete() {
            return Vec::new();
        }

        let stale: Vec<AssetId> = self
            .toolbar_order
            .iter()
            .filter(|id| provider.find(id).is_none())
            .cloned()
            .collect();

        if stale.is_empty() {
            return stale;
        }

        for id in &stale {
            self.selected.remove(id);
        }
        self.toolbar_order.retain(|id| self.selected.contains(id));
        log::debug!("Reconciled selection, dropped {} stale assets", stale.len());

        self.notify(SelectionChange::Reconciled(stale.clone()), provider);
        stale
    }

    /// Resolve the toolbar list against the provider, in selection order
    ///
    /// Identifiers that no longer resolve are skipped.
    #[must_use]
    pub fn selected_assets<P: AssetProvider + ?Sized>(&self, provider: &P) -> Vec<Asset> {
        self.toolbar_order
            .iter()
            .filter_map(|id| {
                let asset = provider.find(id);
                if asset.is_none() {
                    log::debug!("Skipping stale selection entry {id}");
                }
                asset
            })
            .collect()
    }

    /// Register a selection-changed callback
    pub fn subscribe(&mut self, callback: impl FnMut(&SelectionChanged) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a callback; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn notify<P: AssetProvider + ?Sized>(&mut self, change: SelectionChange, provider: &P) {
        if self.subscribers.is_empty() {
            return;
        }
        let event = SelectionChanged {
            count: self.count(),
            selected: self.selected_assets(provider),
            change,
        };
        self.subscribers.emit(&event);
    }
}
