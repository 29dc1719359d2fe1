//! Selection state
//!
//! - `store`: `SelectionStore`, the single source of truth for what is
//!   selected and in which order
//! - `events`: the selection-changed notification and its subscribers
//! - `error`: capacity errors

pub mod error;
pub mod events;
pub mod store;

pub use error::{Result, SelectionError};
pub use events::{SelectionChange, SelectionChanged, SubscriptionId, Subscribers};
pub use store::SelectionStore;
