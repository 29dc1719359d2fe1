//! Asset model and providers
//!
//! # Architecture
//!
//! - `types`: `Asset`, `AssetId`, `MediaKind`, and the `AssetSlot` sentinel
//! - `provider`: the `AssetProvider` trait consumed by the selection layer
//! - `group`: `AssetGroup`, an in-memory provider that can fill in pages
//! - `loader`: directory enumeration, synchronous or on a worker thread

pub mod error;
pub mod group;
pub mod loader;
pub mod provider;
pub mod types;

pub use error::{AssetError, Result};
pub use group::AssetGroup;
pub use loader::{GroupLoader, LoadEvent, LoadProgress, load_group, scan_directory};
pub use provider::AssetProvider;
pub use types::{Asset, AssetId, AssetSlot, MediaFilter, MediaKind};
