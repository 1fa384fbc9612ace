//! Property change notification.
//!
//! The view model announces every observable field it changes, by name,
//! so a binding layer can re-read just that field. Callbacks run
//! synchronously on whoever performed the change, which is always the
//! view model's owner.

use pipeline::Decade;
use std::any::Any;
use std::fmt;
use std::sync::Weak;
use tracing::trace;

/// Observable fields of the people view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    TodaysWinners,
    LastRefreshTime,
    Include70s,
    Include80s,
    Include90s,
    Include00s,
    Include10s,
    People,
    ViewModelException,
}

impl Property {
    /// The five decade toggles, in the order a reset announces them.
    pub const TOGGLES: [Property; 5] = [
        Property::Include70s,
        Property::Include80s,
        Property::Include90s,
        Property::Include00s,
        Property::Include10s,
    ];

    /// Field name as a binding layer would know it.
    pub fn name(self) -> &'static str {
        match self {
            Property::TodaysWinners => "TodaysWinners",
            Property::LastRefreshTime => "LastRefreshTime",
            Property::Include70s => "Include70s",
            Property::Include80s => "Include80s",
            Property::Include90s => "Include90s",
            Property::Include00s => "Include00s",
            Property::Include10s => "Include10s",
            Property::People => "People",
            Property::ViewModelException => "ViewModelException",
        }
    }

    pub fn for_decade(decade: Decade) -> Property {
        match decade {
            Decade::Seventies => Property::Include70s,
            Decade::Eighties => Property::Include80s,
            Decade::Nineties => Property::Include90s,
            Decade::TwoThousands => Property::Include00s,
            Decade::TwentyTens => Property::Include10s,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle returned by [`Notifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(Property) + Send>;

/// Keeps a subscription alive; once every strong reference is gone the
/// subscription is dropped.
pub type Owner = Weak<dyn Any + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    /// `None` listens to every property
    property: Option<Property>,
    callback: Callback,
    owner: Option<Owner>,
}

impl Subscription {
    fn is_live(&self) -> bool {
        self.owner.as_ref().is_none_or(|owner| owner.strong_count() > 0)
    }
}

/// Registry of change callbacks.
#[derive(Default)]
pub struct Notifier {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to every property change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Property) + Send + 'static,
    {
        self.add(None, Box::new(callback), None)
    }

    /// Listen to every property change for as long as `owner` is alive.
    pub fn subscribe_owned<F>(&mut self, owner: Owner, callback: F) -> SubscriptionId
    where
        F: FnMut(Property) + Send + 'static,
    {
        self.add(None, Box::new(callback), Some(owner))
    }

    /// Listen to a single property.
    pub fn subscribe_to<F>(&mut self, property: Property, callback: F) -> SubscriptionId
    where
        F: FnMut(Property) + Send + 'static,
    {
        self.add(Some(property), Box::new(callback), None)
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Live subscriptions; ones whose owner is gone are not counted.
    pub fn len(&self) -> usize {
        self.subscriptions.iter().filter(|s| s.is_live()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Announce a change to every interested subscriber, in subscription order.
    pub fn raise(&mut self, property: Property) {
        trace!(property = property.name(), "Property changed");
        self.prune();
        for subscription in &mut self.subscriptions {
            if subscription.property.is_none_or(|p| p == property) {
                (subscription.callback)(property);
            }
        }
    }

    pub fn raise_all(&mut self, properties: &[Property]) {
        for property in properties {
            self.raise(*property);
        }
    }

    fn prune(&mut self) {
        self.subscriptions.retain(Subscription::is_live);
    }

    fn add(
        &mut self,
        property: Option<Property>,
        callback: Callback,
        owner: Option<Owner>,
    ) -> SubscriptionId {
        self.prune();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            property,
            callback,
            owner,
        });
        id
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscriptions", &self.len())
            .finish()
    }
}
