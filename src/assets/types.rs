//! Core asset types
//!
//! Assets are read-only descriptors handed out by an asset provider. The
//! selection layer only ever stores their identifiers.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File extensions recognized as still images
const PHOTO_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "heic", "heif",
];

/// File extensions recognized as videos
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "avi", "mkv", "webm", "3gp"];

/// Opaque identifier of an asset within its group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create an identifier from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Whether an asset is a still image or a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    /// Detect the media kind from a path's extension (case-insensitive)
    ///
    /// Returns `None` for anything that isn't a known image or video format.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();

        if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Photo)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Short label for list output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }
}

/// Which kinds of media a group exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFilter {
    /// Photos and videos
    #[default]
    All,
    /// Still images only
    Photos,
    /// Videos only
    Videos,
}

impl MediaFilter {
    /// Check whether a media kind passes this filter
    #[must_use]
    pub const fn accepts(self, kind: MediaKind) -> bool {
        matches!(
            (self, kind),
            (Self::All, _) | (Self::Photos, MediaKind::Photo) | (Self::Videos, MediaKind::Video)
        )
    }
}

impl fmt::Display for MediaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Photos => "photos",
            Self::Videos => "videos",
        };
        f.write_str(name)
    }
}

/// One media item from an asset group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Identifier, unique within the group
    pub id: AssetId,

    /// Displayable thumbnail reference
    pub thumbnail: PathBuf,

    /// Still image or video
    pub kind: MediaKind,

    /// Last modification time, if known
    pub modified: Option<DateTime<Local>>,
}

impl Asset {
    /// Create an asset without a modification time
    #[must_use]
    pub fn new(id: impl Into<AssetId>, thumbnail: impl Into<PathBuf>, kind: MediaKind) -> Self {
        Self {
            id: id.into(),
            thumbnail: thumbnail.into(),
            kind,
            modified: None,
        }
    }

    /// Build an asset from a media file path
    ///
    /// The path doubles as identifier and thumbnail reference. Returns `None`
    /// when the extension is not a recognized media format.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let kind = MediaKind::from_path(path)?;
        let modified = path
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);

        Some(Self {
            id: AssetId::new(path.to_string_lossy()),
            thumbnail: path.to_path_buf(),
            kind,
            modified,
        })
    }

    /// Display name (file name of the thumbnail, falling back to the id)
    #[must_use]
    pub fn name(&self) -> String {
        self.thumbnail
            .file_name()
            .map_or_else(|| self.id.to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Result of looking up an index in a group that may still be loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSlot {
    /// The asset has been enumerated
    Ready(Asset),
    /// The index is within the declared count but not loaded yet
    Pending,
}

impl AssetSlot {
    /// The asset, if it has been loaded
    #[must_use]
    pub const fn asset(&self) -> Option<&Asset> {
        match self {
            Self::Ready(asset) => Some(asset),
            Self::Pending => None,
        }
    }

    /// Whether the slot is still waiting on the provider
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_path() {
        assert_eq!(MediaKind::from_path(Path::new("a.JPG")), Some(MediaKind::Photo));
        assert_eq!(MediaKind::from_path(Path::new("dir/b.heic")), Some(MediaKind::Photo));
        assert_eq!(MediaKind::from_path(Path::new("clip.MoV")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_media_filter_accepts() {
        assert!(MediaFilter::All.accepts(MediaKind::Photo));
        assert!(MediaFilter::All.accepts(MediaKind::Video));
        assert!(MediaFilter::Photos.accepts(MediaKind::Photo));
        assert!(!MediaFilter::Photos.accepts(MediaKind::Video));
        assert!(MediaFilter::Videos.accepts(MediaKind::Video));
        assert!(!MediaFilter::Videos.accepts(MediaKind::Photo));
    }

    #[test]
    fn test_asset_name_uses_file_name() {
        let asset = Asset::new("id-1", "/photos/beach.png", MediaKind::Photo);
        assert_eq!(asset.name(), "beach.png");

        let bare = Asset::new("id-2", "", MediaKind::Video);
        assert_eq!(bare.name(), "id-2");
    }

    #[test]
    fn test_asset_from_path_rejects_non_media() {
        assert!(Asset::from_path(Path::new("readme.md")).is_none());

        let asset = Asset::from_path(Path::new("missing/sunset.jpeg")).unwrap();
        assert_eq!(asset.kind, MediaKind::Photo);
        assert_eq!(asset.id.as_str(), "missing/sunset.jpeg");
        assert!(asset.modified.is_none());
    }

    #[test]
    fn test_slot_accessors() {
        let slot = AssetSlot::Ready(Asset::new("x", "x.png", MediaKind::Photo));
        assert!(!slot.is_pending());
        assert_eq!(slot.asset().unwrap().id, AssetId::from("x"));

        assert!(AssetSlot::Pending.is_pending());
        assert!(AssetSlot::Pending.asset().is_none());
    }

    #[test]
    fn test_asset_id_serializes_transparently() {
        let json = serde_json::to_string(&AssetId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
