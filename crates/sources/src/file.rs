//! Reader backed by a JSON file on disk.
//!
//! The file holds a JSON array of people:
//!
//! ```text
//! [
//!   { "id": 1, "given_name": "John", "family_name": "Smith",
//!     "start_date": "2000-10-01", "rating": 7 }
//! ]
//! ```
//!
//! The file is re-read on every fetch, so edits show up on the next cache
//! miss.

use crate::error::{ReaderError, Result};
use crate::reader::PersonReader;
use futures::FutureExt;
use futures::future::BoxFuture;
use people_common::{Person, PersonId};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Loads people from a JSON file each time it is asked.
#[derive(Debug, Clone)]
pub struct JsonFileReader {
    path: PathBuf,
}

impl JsonFileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<Person>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ReaderError::Io {
                path: self.path.clone(),
                source,
            })?;
        let people: Vec<Person> =
            serde_json::from_str(&content).map_err(|source| ReaderError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} people", people.len());
        Ok(people)
    }
}

impl PersonReader for JsonFileReader {
    fn name(&self) -> &str {
        "JsonFileReader"
    }

    fn get_people(&self) -> BoxFuture<'_, Result<Vec<Person>>> {
        self.load().boxed()
    }

    fn get_person(&self, id: PersonId) -> BoxFuture<'_, Result<Option<Person>>> {
        async move {
            let people = self.load().await?;
            Ok(people.into_iter().find(|p| p.id == id))
        }
        .boxed()
    }
}
