//! # People View Model
//!
//! Presentation state for the people list screen:
//! 1. Resolve the data reader and today's winners from the container
//! 2. Fetch people in the background, at most once per cache window
//! 3. Derive the visible list from the snapshot and the decade toggles
//! 4. Announce every observable change through the notifier
//! 5. Capture reader failures as fault state and hand them back to the owner
//!
//! ## Ownership
//!
//! The view model lives on one owning task and is only ever touched
//! through `&mut self`. Fetches run as tokio tasks; their results come
//! back over a channel and are applied when the owner pumps completions
//! (`try_process_completions`, `next_completion`, `settle`, `wait_for`).
//! Observers therefore always see changes on the owner, in order.
//!
//! Every fetch carries a generation number. Only the most recent fetch's
//! result is applied; results from superseded fetches are dropped.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use people_common::{Person, SharedWinners, Winners};
use pipeline::{Decade, FilterState, derive_visible};
use sources::{PersonReader, ReaderError};

use crate::clock::{Clock, SystemClock};
use crate::container::{Container, TODAYS_WINNERS};
use crate::error::{Result, ViewModelError};
use crate::notify::{Notifier, Property, SubscriptionId};
use crate::tracker::ChangeTracker;

/// How long a successful fetch stays fresh.
pub const CACHE_WINDOW: Duration = Duration::from_secs(10);

/// Result of one background fetch, tagged with the fetch that produced it.
#[derive(Debug)]
struct FetchCompletion {
    generation: u64,
    result: sources::Result<Vec<Person>>,
}

/// Presentation state for the people screen.
pub struct PeopleViewModel {
    container: Container,
    clock: Arc<dyn Clock>,
    runtime: Option<Handle>,

    data_reader: Option<Arc<dyn PersonReader>>,
    todays_winners: Option<SharedWinners>,

    last_refresh_time: Option<DateTime<Utc>>,
    filters: FilterState,
    full_people: Vec<Person>,
    people: Vec<Person>,
    view_model_exception: Option<Arc<ReaderError>>,

    notifier: Notifier,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
    fetch_generation: u64,
    pending_fetches: usize,
}

impl PeopleViewModel {
    /// Create an uninitialized view model reading the system clock.
    pub fn new(container: Container) -> Self {
        Self::with_clock(container, Arc::new(SystemClock))
    }

    pub fn with_clock(container: Container, clock: Arc<dyn Clock>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            container,
            clock,
            runtime: None,
            data_reader: None,
            todays_winners: None,
            last_refresh_time: None,
            filters: FilterState::default(),
            full_people: Vec::new(),
            people: Vec::new(),
            view_model_exception: None,
            notifier: Notifier::new(),
            completions_tx,
            completions_rx,
            fetch_generation: 0,
            pending_fetches: 0,
        }
    }

    /// Resolve collaborators and kick off the first fetch.
    ///
    /// Must be called from inside a tokio runtime; that runtime runs every
    /// later fetch. Fails with `MissingDependency` before any fetch is
    /// attempted if the container lacks the reader or today's winners.
    pub fn initialize(&mut self) -> Result<()> {
        let reader = self.container.resolve_reader()?;
        let winners = self.container.resolve_winners(TODAYS_WINNERS)?;
        let runtime = Handle::try_current().map_err(|_| ViewModelError::NoRuntime)?;

        info!(reader = reader.name(), "Initializing people view model");
        self.data_reader = Some(reader);
        self.runtime = Some(runtime);
        self.todays_winners = Some(winners);
        self.notifier.raise(Property::TodaysWinners);

        self.refresh_people()
    }

    /// Refresh the list.
    ///
    /// Within [`CACHE_WINDOW`] of the last successful fetch this only
    /// resets the toggles and re-derives the view. Otherwise it clears the
    /// view and starts a background fetch; the result is applied when the
    /// owner next pumps completions.
    #[instrument(skip(self))]
    pub fn refresh_people(&mut self) -> Result<()> {
        let (reader, runtime) = match (&self.data_reader, &self.runtime) {
            (Some(reader), Some(runtime)) => (Arc::clone(reader), runtime.clone()),
            _ => return Err(ViewModelError::NotInitialized),
        };

        if self.is_cache_valid() {
            debug!("Cache still fresh, re-applying filters");
            self.reset_filters_to_defaults();
            return Ok(());
        }

        self.start_fetch(reader, &runtime);
        Ok(())
    }

    fn is_cache_valid(&self) -> bool {
        let Some(last) = self.last_refresh_time else {
            return false;
        };
        match (self.clock.now() - last).to_std() {
            Ok(age) => age < CACHE_WINDOW,
            // last refresh is in the future
            Err(_) => true,
        }
    }

    fn start_fetch(&mut self, reader: Arc<dyn PersonReader>, runtime: &Handle) {
        self.set_people(Vec::new());

        self.fetch_generation += 1;
        self.pending_fetches += 1;
        let generation = self.fetch_generation;
        let completions = self.completions_tx.clone();
        info!(generation, reader = reader.name(), "Fetching people");

        runtime.spawn(async move {
            let result = AssertUnwindSafe(async { reader.get_people().await })
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(ReaderError::Panicked(panic_message(&*panic))));

            if completions.send(FetchCompletion { generation, result }).is_err() {
                debug!(generation, "View model dropped before fetch finished");
            }
        });
    }

    // ------------------------------------------------------------------
    // Completion pumping
    // ------------------------------------------------------------------

    /// Apply every fetch result that has already arrived.
    ///
    /// Returns how many results were taken off the queue. A failed fetch
    /// stops processing and comes back as `Err(Provider)`, after the fault
    /// state has been recorded and announced.
    pub fn try_process_completions(&mut self) -> Result<usize> {
        let mut processed = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            processed += 1;
            self.apply_completion(completion)?;
        }
        Ok(processed)
    }

    /// Wait for the next fetch result and apply it.
    ///
    /// Pends forever when no fetch is outstanding, which makes it suitable
    /// as one arm of a `select!` loop.
    pub async fn next_completion(&mut self) -> Result<()> {
        let next = self.completions_rx.recv().await;
        match next {
            Some(completion) => self.apply_completion(completion),
            // we hold a sender, so the channel never closes
            None => Ok(()),
        }
    }

    /// Apply results until no fetch is outstanding.
    ///
    /// Returns `Ok(false)` if `timeout` ran out first.
    pub async fn settle(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        while self.pending_fetches > 0 {
            let next = tokio::time::timeout_at(deadline, self.completions_rx.recv()).await;
            match next {
                Ok(Some(completion)) => self.apply_completion(completion)?,
                Ok(None) => break,
                Err(_) => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Pump results until `tracker` has seen `property` change.
    ///
    /// Returns `Ok(false)` on timeout, or once nothing is left in flight
    /// that could still raise it.
    pub async fn wait_for(
        &mut self,
        tracker: &ChangeTracker,
        property: Property,
        timeout: Duration,
    ) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        self.try_process_completions()?;

        while !tracker.contains(property) {
            if self.pending_fetches == 0 {
                return Ok(false);
            }
            let next = tokio::time::timeout_at(deadline, self.completions_rx.recv()).await;
            match next {
                Ok(Some(completion)) => self.apply_completion(completion)?,
                Ok(None) | Err(_) => return Ok(tracker.contains(property)),
            }
        }
        Ok(true)
    }

    pub fn is_fetching(&self) -> bool {
        self.pending_fetches > 0
    }

    fn apply_completion(&mut self, completion: FetchCompletion) -> Result<()> {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);

        if completion.generation != self.fetch_generation {
            warn!(
                generation = completion.generation,
                current = self.fetch_generation,
                "Discarding result of superseded fetch"
            );
            return Ok(());
        }

        match completion.result {
            Ok(people) => {
                info!(count = people.len(), "Fetched people");
                self.full_people = people;
                self.reset_filters_to_defaults();
                let now = self.clock.now();
                self.set_last_refresh_time(now);
                if self.view_model_exception.is_some() {
                    self.set_view_model_exception(None);
                }
                Ok(())
            }
            Err(err) => {
                let err = Arc::new(err);
                error!(error = %err, "Failed to fetch people");
                self.set_view_model_exception(Some(Arc::clone(&err)));
                Err(ViewModelError::Provider(err))
            }
        }
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn set_include(&mut self, decade: Decade, include: bool) {
        self.filters.set(decade, include);
        self.refresh_filter();
    }

    pub fn set_include_70s(&mut self, include: bool) {
        self.set_include(Decade::Seventies, include);
    }

    pub fn set_include_80s(&mut self, include: bool) {
        self.set_include(Decade::Eighties, include);
    }

    pub fn set_include_90s(&mut self, include: bool) {
        self.set_include(Decade::Nineties, include);
    }

    pub fn set_include_00s(&mut self, include: bool) {
        self.set_include(Decade::TwoThousands, include);
    }

    pub fn set_include_10s(&mut self, include: bool) {
        self.set_include(Decade::TwentyTens, include);
    }

    fn reset_filters_to_defaults(&mut self) {
        self.filters.reset();
        self.refresh_filter();
    }

    /// Announce all five toggles, then re-derive the visible list.
    fn refresh_filter(&mut self) {
        self.notifier.raise_all(&Property::TOGGLES);
        let visible = derive_visible(&self.full_people, &self.filters);
        self.set_people(visible);
    }

    fn set_people(&mut self, people: Vec<Person>) {
        self.people = people;
        self.notifier.raise(Property::People);
    }

    pub fn set_last_refresh_time(&mut self, time: DateTime<Utc>) {
        self.last_refresh_time = Some(time);
        self.notifier.raise(Property::LastRefreshTime);
    }

    fn set_view_model_exception(&mut self, fault: Option<Arc<ReaderError>>) {
        self.view_model_exception = fault;
        self.notifier.raise(Property::ViewModelException);
    }

    // ------------------------------------------------------------------
    // Today's winners
    // ------------------------------------------------------------------

    /// Add `person` to today's winners. See [`people_common::Winners::add`].
    ///
    /// Winners observers run after the lock is released.
    pub fn add_to_winners(&self, person: Option<&Person>) -> Result<bool> {
        Ok(Winners::update(self.winners()?, |winners| winners.add(person)))
    }

    pub fn remove_from_winners(&self, person: Option<&Person>) -> Result<bool> {
        Ok(Winners::update(self.winners()?, |winners| winners.remove(person)))
    }

    pub fn clear_winners(&self) -> Result<()> {
        Winners::update(self.winners()?, Winners::clear);
        Ok(())
    }

    fn winners(&self) -> Result<&SharedWinners> {
        self.todays_winners
            .as_ref()
            .ok_or(ViewModelError::NotInitialized)
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Property) + Send + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn subscribe_to<F>(&mut self, property: Property, callback: F) -> SubscriptionId
    where
        F: FnMut(Property) + Send + 'static,
    {
        self.notifier.subscribe_to(property, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Attach a fresh [`ChangeTracker`]. It stops recording when detached
    /// with [`PeopleViewModel::untrack`] or when its last clone is dropped.
    pub fn track_changes(&mut self) -> ChangeTracker {
        let mut tracker = ChangeTracker::new();
        tracker.attach(&mut self.notifier);
        tracker
    }

    pub fn untrack(&mut self, tracker: &mut ChangeTracker) -> bool {
        tracker.detach(&mut self.notifier)
    }

    /// Number of live change subscriptions, trackers included.
    pub fn subscription_count(&self) -> usize {
        self.notifier.len()
    }

    // ------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------

    /// The visible list.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The last successfully fetched snapshot, unfiltered.
    pub fn full_people(&self) -> &[Person] {
        &self.full_people
    }

    pub fn filters(&self) -> FilterState {
        self.filters
    }

    pub fn include_70s(&self) -> bool {
        self.filters.include_70s
    }

    pub fn include_80s(&self) -> bool {
        self.filters.include_80s
    }

    pub fn include_90s(&self) -> bool {
        self.filters.include_90s
    }

    pub fn include_00s(&self) -> bool {
        self.filters.include_00s
    }

    pub fn include_10s(&self) -> bool {
        self.filters.include_10s
    }

    /// `None` until the first successful fetch.
    pub fn last_refresh_time(&self) -> Option<DateTime<Utc>> {
        self.last_refresh_time
    }

    /// The most recent fetch failure, cleared by the next success.
    pub fn view_model_exception(&self) -> Option<&Arc<ReaderError>> {
        self.view_model_exception.as_ref()
    }

    pub fn todays_winners(&self) -> Option<&SharedWinners> {
        self.todays_winners.as_ref()
    }

    pub fn data_reader(&self) -> Option<&Arc<dyn PersonReader>> {
        self.data_reader.as_ref()
    }
}

impl std::fmt::Debug for PeopleViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeopleViewModel")
            .field("people", &self.people.len())
            .field("full_people", &self.full_people.len())
            .field("filters", &self.filters)
            .field("last_refresh_time", &self.last_refresh_time)
            .field("view_model_exception", &self.view_model_exception)
            .field("fetch_generation", &self.fetch_generation)
            .field("pending_fetches", &self.pending_fetches)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "reader panicked".to_string()
    }
}
