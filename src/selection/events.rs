//! Selection change notifications
//!
//! Consumers register plain callbacks. Every state-changing mutation of the
//! store delivers one [`SelectionChanged`] to each callback, in registration
//! order.

use crate::assets::{Asset, AssetId};
use std::fmt;

/// What caused a selection change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// An asset was added by a toggle
    Selected(AssetId),
    /// An asset was removed by a toggle
    Deselected(AssetId),
    /// An asset was removed because it left the group or the toolbar
    Removed(AssetId),
    /// Every asset was deselected
    Cleared,
    /// Stale identifiers were dropped
    Reconciled(Vec<AssetId>),
}

/// Payload delivered to subscribers after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Number of selected assets after the change
    pub count: usize,
    /// Resolved toolbar list, in selection order
    pub selected: Vec<Asset>,
    /// The mutation that produced this state
    pub change: SelectionChange,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&SelectionChanged)>;

/// Registered selection-changed callbacks
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback
    pub fn subscribe(&mut self, callback: impl FnMut(&SelectionChanged) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sid, _)| *sid != id);
        self.callbacks.len() != before
    }

    /// Number of registered callbacks
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether nobody is listening
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Deliver an event to every callback
    pub fn emit(&mut self, event: &SelectionChanged) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event(count: usize) -> SelectionChanged {
        SelectionChanged {
            count,
            selected: Vec::new(),
            change: SelectionChange::Cleared,
        }
    }

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let first = Rc::clone(&log);
        subscribers.subscribe(move |e| first.borrow_mut().push(("grid", e.count)));
        let second = Rc::clone(&log);
        subscribers.subscribe(move |e| second.borrow_mut().push(("toolbar", e.count)));

        subscribers.emit(&event(3));

        assert_eq!(*log.borrow(), vec![("grid", 3), ("toolbar", 3)]);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::new();

        let counter = Rc::clone(&hits);
        let id = subscribers.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(subscribers.len(), 1);

        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        assert!(subscribers.is_empty());

        subscribers.emit(&event(1));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let mut subscribers = Subscribers::new();
        let a = subscribers.subscribe(|_| {});
        let b = subscribers.subscribe(|_| {});
        assert_ne!(a, b);
    }
}
