//! In-memory asset group
//!
//! `AssetGroup` is the concrete provider used by the controller. It can be
//! built complete from a list of assets, or filled page by page while a
//! background loader enumerates the group.

use super::provider::AssetProvider;
use super::types::{Asset, AssetId, AssetSlot, MediaFilter};
use std::collections::HashMap;

/// An ordered, possibly still loading, collection of assets
#[derive(Debug, Clone)]
pub struct AssetGroup {
    name: String,
    filter: MediaFilter,
    assets: Vec<Asset>,
    index: HashMap<AssetId, usize>,
    /// Total announced by the loader before enumeration finished
    declared: Option<usize>,
    complete: bool,
}

impl AssetGroup {
    /// Create an empty group that is still waiting for pages
    #[must_use]
    pub fn new(name: impl Into<String>, filter: MediaFilter) -> Self {
        Self {
            name: name.into(),
            filter,
            assets: Vec::new(),
            index: HashMap::new(),
            declared: None,
            complete: false,
        }
    }

    /// Create a fully loaded group
    #[must_use]
    pub fn with_assets(name: impl Into<String>, assets: Vec<Asset>) -> Self {
        let mut group = Self::new(name, MediaFilter::All);
        group.push_page(assets);
        group.finish();
        group
    }

    /// Group name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Media filter applied to incoming pages
    #[must_use]
    pub const fn filter(&self) -> MediaFilter {
        self.filter
    }

    /// Number of assets loaded so far
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.assets.len()
    }

    /// Loaded assets in group order
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Announce how many assets the group will contain
    pub fn begin(&mut self, total: usize) {
        self.declared = Some(total);
        self.complete = false;
    }

    /// Append a page of assets
    ///
    /// Assets rejected by the group's filter or already present are skipped.
    /// Returns the number of assets actually added.
    pub fn push_page(&mut self, page: Vec<Asset>) -> usize {
        let before = self.assets.len();

        for asset in page {
            if !self.filter.accepts(asset.kind) {
                continue;
            }
            if self.index.contains_key(&asset.id) {
                log::warn!("Duplicate asset {} in group '{}', skipping", asset.id, self.name);
                continue;
            }
            self.index.insert(asset.id.clone(), self.assets.len());
            self.assets.push(asset);
        }

        self.assets.len() - before
    }

    /// Mark enumeration as finished
    ///
    /// The group's count becomes the number of assets actually loaded.
    pub fn finish(&mut self) {
        self.declared = None;
        self.complete = true;
    }

    /// Remove an asset from the group
    ///
    /// Later assets shift down one index, as they would in the grid.
    pub fn remove(&mut self, id: &AssetId) -> Option<Asset> {
        let position = self.index.remove(id)?;
        let removed = self.assets.remove(position);

        for (i, asset) in self.assets.iter().enumerate().skip(position) {
            self.index.insert(asset.id.clone(), i);
        }
        if let Some(total) = self.declared.as_mut() {
            *total = total.saturating_sub(1);
        }

        Some(removed)
    }
}

impl AssetProvider for AssetGroup {
    fn group_asset_count(&self) -> usize {
        self.declared
            .map_or(self.assets.len(), |total| total.max(self.assets.len()))
    }

    fn asset_at(&self, index: usize) -> Option<AssetSlot> {
        if let Some(asset) = self.assets.get(index) {
            Some(AssetSlot::Ready(asset.clone()))
        } else if index < self.group_asset_count() {
            Some(AssetSlot::Pending)
        } else {
            None
        }
    }

    fn find(&self, id: &AssetId) -> Option<Asset> {
        self.index.get(id).map(|&i| self.assets[i].clone())
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}
