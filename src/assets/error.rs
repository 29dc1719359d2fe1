//! Asset provider error types

use thiserror::Error;

/// Errors raised while enumerating or loading an asset group
#[derive(Debug, Error)]
pub enum AssetError {
    /// The group directory does not exist or is not a directory
    #[error("Asset group not found: {0}")]
    GroupNotFound(String),

    /// The enumeration pattern could not be built
    #[error("Invalid group pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A directory entry could not be read during enumeration
    #[error("Failed to read asset: {0}")]
    Read(#[from] glob::GlobError),

    /// The background loader went away before finishing
    #[error("Asset loader disconnected")]
    LoaderDisconnected,

    /// The loader reported a failure
    #[error("Asset loading failed: {0}")]
    LoadFailed(String),
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;
