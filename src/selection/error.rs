//! Selection error types

use crate::assets::AssetId;
use thiserror::Error;

/// Errors raised by selection mutations
///
/// Stale identifiers are not errors: they are skipped when the toolbar list
/// is resolved and dropped by `reconcile`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The configured maximum number of selections is already reached
    #[error("Selection limit reached: at most {capacity} assets can be selected")]
    SelectionLimitExceeded { capacity: usize },
    /// The identifier does not belong to the fully loaded group
    #[error("Asset {0} is not in the group")]
    UnknownAsset(AssetId),
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, SelectionError>;
