//! Asset provider boundary
//!
//! The selection layer never enumerates media itself. It asks a provider for
//! the group's size, for the asset at a grid index, and for an asset's
//! identifier.

use super::types::{Asset, AssetId, AssetSlot};

/// Source of the assets presented by a controller
///
/// Lookups are synchronous. A provider still enumerating in the background
/// reports [`AssetSlot::Pending`] for indices it has announced but not yet
/// loaded.
pub trait AssetProvider {
    /// Number of assets in the group, including ones not loaded yet
    fn group_asset_count(&self) -> usize;

    /// Asset at a grid index
    ///
    /// Returns `None` when the index is past the end of the group.
    fn asset_at(&self, index: usize) -> Option<AssetSlot>;

    /// Identifier under which the selection layer tracks an asset
    fn identifier_of(&self, asset: &Asset) -> AssetId {
        asset.id.clone()
    }

    /// Resolve an identifier back to a loaded asset
    ///
    /// The default scans every index; providers with an index should
    /// override it.
    fn find(&self, id: &AssetId) -> Option<Asset> {
        (0..self.group_asset_count())
            .filter_map(|i| self.asset_at(i))
            .find_map(|slot| match slot {
                AssetSlot::Ready(asset) if self.identifier_of(&asset) == *id => Some(asset),
                _ => None,
            })
    }

    /// Whether the provider has finished enumerating the group
    ///
    /// Until then a failed [`find`](Self::find) may only mean "not loaded yet".
    fn is_complete(&self) -> bool {
        true
    }
}
