//! Records property changes so tests and hosts can ask "did X change?".

use crate::notify::{Notifier, Owner, Property, SubscriptionId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Change log fed by a [`Notifier`] subscription.
///
/// Cloning shares the same log. The subscription only lives as long as
/// the log does: once the last clone is dropped the notifier forgets it.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    changes: Arc<Mutex<Vec<Property>>>,
    subscription: Option<SubscriptionId>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording every change `notifier` raises.
    pub fn attach(&mut self, notifier: &mut Notifier) -> SubscriptionId {
        let log = Arc::downgrade(&self.changes);
        let owner: Owner = log.clone();
        let id = notifier.subscribe_owned(owner, move |property| {
            if let Some(changes) = log.upgrade() {
                changes.lock().push(property);
            }
        });
        self.subscription = Some(id);
        id
    }

    /// Stop recording. Returns false if this tracker was not attached to `notifier`.
    pub fn detach(&mut self, notifier: &mut Notifier) -> bool {
        self.subscription
            .take()
            .is_some_and(|id| notifier.unsubscribe(id))
    }

    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// Changes in the order they were raised.
    pub fn changed_properties(&self) -> Vec<Property> {
        self.changes.lock().clone()
    }

    pub fn contains(&self, property: Property) -> bool {
        self.changes.lock().contains(&property)
    }

    pub fn count(&self, property: Property) -> usize {
        self.changes.lock().iter().filter(|p| **p == property).count()
    }

    pub fn reset(&self) {
        self.changes.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_records_and_resets() {
        let mut notifier = Notifier::new();
        let mut tracker = ChangeTracker::new();
        tracker.attach(&mut notifier);

        notifier.raise(Property::People);
        notifier.raise(Property::People);
        notifier.raise(Property::TodaysWinners);

        assert!(tracker.contains(Property::People));
        assert_eq!(tracker.count(Property::People), 2);
        assert!(!tracker.contains(Property::LastRefreshTime));

        tracker.reset();
        assert!(tracker.changed_properties().is_empty());

        notifier.raise(Property::LastRefreshTime);
        assert_eq!(tracker.changed_properties(), vec![Property::LastRefreshTime]);
    }

    #[test]
    fn test_detach_stops_recording() {
        let mut notifier = Notifier::new();
        let mut tracker = ChangeTracker::new();
        tracker.attach(&mut notifier);

        assert!(tracker.detach(&mut notifier));
        assert!(!tracker.detach(&mut notifier));
        assert!(notifier.is_empty());

        notifier.raise(Property::People);
        assert!(tracker.changed_properties().is_empty());
    }

    #[test]
    fn test_dropped_tracker_is_not_a_subscription() {
        let mut notifier = Notifier::new();
        for _ in 0..1000 {
            let mut tracker = ChangeTracker::new();
            tracker.attach(&mut notifier);
        }
        assert_eq!(notifier.len(), 0);

        let mut kept = ChangeTracker::new();
        kept.attach(&mut notifier);
        let clone = kept.clone();
        drop(kept);
        assert_eq!(notifier.len(), 1);

        notifier.raise(Property::People);
        assert_eq!(clone.changed_properties(), vec![Property::People]);
    }
}
