//! In-memory reader over a fixed list of people.

use crate::error::Result;
use crate::reader::PersonReader;
use futures::FutureExt;
use futures::future::BoxFuture;
use people_common::{Person, PersonId};
use tracing::debug;

/// Serves a fixed list of people straight from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReader {
    people: Vec<Person>,
}

impl InMemoryReader {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl PersonReader for InMemoryReader {
    fn name(&self) -> &str {
        "InMemoryReader"
    }

    fn get_people(&self) -> BoxFuture<'_, Result<Vec<Person>>> {
        async move {
            debug!("Serving {} people from memory", self.people.len());
            Ok(self.people.clone())
        }
        .boxed()
    }

    fn get_person(&self, id: PersonId) -> BoxFuture<'_, Result<Option<Person>>> {
        async move { Ok(self.people.iter().find(|p| p.id == id).cloned()) }.boxed()
    }
}
