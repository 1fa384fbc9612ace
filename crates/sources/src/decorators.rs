//! Reader decorators that simulate slow or unreliable services.
//!
//! These wrap any other reader, so a host can turn the in-memory sample into
//! something that behaves like a remote service while developing the UI.

use crate::error::{ReaderError, Result};
use crate::reader::PersonReader;
use futures::FutureExt;
use futures::future::BoxFuture;
use people_common::{Person, PersonId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Sleeps before delegating every call.
pub struct DelayedReader {
    inner: Arc<dyn PersonReader>,
    delay: Duration,
}

impl DelayedReader {
    pub fn new(inner: Arc<dyn PersonReader>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl PersonReader for DelayedReader {
    fn name(&self) -> &str {
        "DelayedReader"
    }

    fn get_people(&self) -> BoxFuture<'_, Result<Vec<Person>>> {
        async move {
            debug!("Delaying {} by {:?}", self.inner.name(), self.delay);
            tokio::time::sleep(self.delay).await;
            self.inner.get_people().await
        }
        .boxed()
    }

    fn get_person(&self, id: PersonId) -> BoxFuture<'_, Result<Option<Person>>> {
        async move {
            tokio::time::sleep(self.delay).await;
            self.inner.get_person(id).await
        }
        .boxed()
    }
}

/// Fails every call with [`ReaderError::Unavailable`].
#[derive(Debug, Clone)]
pub struct FailingReader {
    reason: String,
}

impl FailingReader {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingReader {
    fn default() -> Self {
        Self::new("service is not responding")
    }
}

impl PersonReader for FailingReader {
    fn name(&self) -> &str {
        "FailingReader"
    }

    fn get_people(&self) -> BoxFuture<'_, Result<Vec<Person>>> {
        async move { Err(ReaderError::Unavailable(self.reason.clone())) }.boxed()
    }

    fn get_person(&self, _id: PersonId) -> BoxFuture<'_, Result<Option<Person>>> {
        async move { Err(ReaderError::Unavailable(self.reason.clone())) }.boxed()
    }
}

/// Fails a random share of `get_people` calls.
pub struct FlakyReader {
    inner: Arc<dyn PersonReader>,
    failure_rate: f64,
}

impl FlakyReader {
    /// `failure_rate` is clamped to `0.0..=1.0`.
    pub fn new(inner: Arc<dyn PersonReader>, failure_rate: f64) -> Self {
        Self {
            inner,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl PersonReader for FlakyReader {
    fn name(&self) -> &str {
        "FlakyReader"
    }

    fn get_people(&self) -> BoxFuture<'_, Result<Vec<Person>>> {
        // Roll before building the future; the thread rng is not Send.
        let roll: f64 = rand::random();
        let fail = roll < self.failure_rate;
        async move {
            if fail {
                warn!("Injected failure (rate {:.2})", self.failure_rate);
                return Err(ReaderError::Unavailable("injected failure".to_string()));
            }
            self.inner.get_people().await
        }
        .boxed()
    }

    fn get_person(&self, id: PersonId) -> BoxFuture<'_, Result<Option<Person>>> {
        self.inner.get_person(id)
    }
}
