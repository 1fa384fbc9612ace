//! Today's winners: the session's selection of people.
//!
//! `Winners` is an ordered, duplicate-free list of people tied to a calendar
//! date. Membership is decided by person id. Every mutation that changes
//! membership is reported to subscribed observers so a UI can redraw.

use crate::types::Person;
use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;
use std::sync::Arc;
use tracing::debug;

/// Winners shared between the host session and the view model.
///
/// The host creates it, the view model mutates it. Single writer.
/// Mutate through [`Winners::update`] when observers may read the winners.
pub type SharedWinners = Arc<Mutex<Winners>>;

/// Handle returned by [`Winners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// What happened to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Added(Person),
    Removed(Person),
    Cleared,
}

type Observer = Box<dyn FnMut(&SelectionChange) + Send>;

/// The day's chosen people.
#[derive(Serialize, Deserialize)]
pub struct Winners {
    date: NaiveDate,
    selected_people: Vec<Person>,
    #[serde(skip)]
    observers: Vec<(ObserverId, Observer)>,
    #[serde(skip)]
    next_observer: u64,
    /// Changes held back while [`Winners::update`] owns the lock.
    #[serde(skip)]
    deferred: Option<Vec<SelectionChange>>,
    /// Observers removed while their list was out being notified.
    #[serde(skip)]
    detached: Option<Vec<ObserverId>>,
}

impl Winners {
    /// Create an empty selection for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            selected_people: Vec::new(),
            observers: Vec::new(),
            next_observer: 0,
            deferred: None,
            detached: None,
        }
    }

    /// Empty selection for the local calendar date.
    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Wrap in the shared handle used by the container and view model.
    pub fn into_shared(self) -> SharedWinners {
        Arc::new(Mutex::new(self))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn selected_people(&self) -> &[Person] {
        &self.selected_people
    }

    pub fn len(&self) -> usize {
        self.selected_people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_people.is_empty()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.selected_people.contains(person)
    }

    /// Append `person` unless it is `None` or already selected.
    ///
    /// Returns `true` when the selection changed.
    pub fn add(&mut self, person: Option<&Person>) -> bool {
        let Some(person) = person else {
            return false;
        };
        if self.contains(person) {
            debug!(person_id = person.id, "person already selected");
            return false;
        }
        self.selected_people.push(person.clone());
        self.notify(SelectionChange::Added(person.clone()));
        true
    }

    /// Remove the entry with `person`'s id, if any.
    ///
    /// Returns `true` when the selection changed.
    pub fn remove(&mut self, person: Option<&Person>) -> bool {
        let Some(person) = person else {
            return false;
        };
        let Some(position) = self.selected_people.iter().position(|p| p == person) else {
            return false;
        };
        let removed = self.selected_people.remove(position);
        self.notify(SelectionChange::Removed(removed));
        true
    }

    /// Empty the selection. Observers are told even if it was already empty.
    pub fn clear(&mut self) {
        self.selected_people.clear();
        self.notify(SelectionChange::Cleared);
    }

    /// Register a callback for membership changes.
    ///
    /// Direct calls to `add`, `remove` and `clear` run callbacks in place,
    /// under whatever lock the caller holds. Changes made through
    /// [`Winners::update`] reach callbacks after the lock is released.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&SelectionChange) + Send + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        if self.observers.len() != before {
            return true;
        }
        match &mut self.detached {
            Some(detached) if id.0 < self.next_observer && !detached.contains(&id) => {
                detached.push(id);
                true
            }
            _ => false,
        }
    }

    /// Run `f` on the shared winners, then notify observers unlocked.
    ///
    /// Callbacks may lock `shared` again. Observers subscribed or
    /// unsubscribed from inside a callback take effect for the next update.
    pub fn update<R>(shared: &SharedWinners, f: impl FnOnce(&mut Winners) -> R) -> R {
        let (result, changes, mut observers) = {
            let mut winners = shared.lock();
            winners.deferred = Some(Vec::new());
            let result = f(&mut winners);
            let changes = winners.deferred.take().unwrap_or_default();
            if changes.is_empty() {
                return result;
            }
            winners.detached = Some(Vec::new());
            (result, changes, mem::take(&mut winners.observers))
        };

        for change in &changes {
            for (_, observer) in &mut observers {
                observer(change);
            }
        }

        let mut winners = shared.lock();
        if let Some(detached) = winners.detached.take() {
            observers.retain(|(id, _)| !detached.contains(id));
        }
        observers.append(&mut winners.observers);
        winners.observers = observers;
        result
    }

    fn notify(&mut self, change: SelectionChange) {
        if let Some(deferred) = &mut self.deferred {
            deferred.push(change);
            return;
        }
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }
}

impl fmt::Debug for Winners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Winners")
            .field("date", &self.date)
            .field("selected_people", &self.selected_people)
            .field("observers", &self.observers.len())
            .finish()
    }
}
