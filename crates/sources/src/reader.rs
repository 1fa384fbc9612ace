//! The data-provider capability consumed by the presentation layer.

use crate::error::Result;
use futures::future::BoxFuture;
use people_common::{Person, PersonId};

/// Core trait for anything that can hand out people.
///
/// ## Design Note
/// - `Send + Sync` lets a reader live behind `Arc<dyn PersonReader>` and be
///   driven from a spawned task
/// - Methods return boxed futures so the trait stays object safe
pub trait PersonReader: Send + Sync {
    /// Returns the name of this reader (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch every person, in source order.
    fn get_people(&self) -> BoxFuture<'_, Result<Vec<Person>>>;

    /// Fetch a single person by id. `Ok(None)` when the id is unknown.
    fn get_person(&self, id: PersonId) -> BoxFuture<'_, Result<Option<Person>>>;
}
