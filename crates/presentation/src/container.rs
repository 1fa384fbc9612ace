//! Service container handing collaborators to the view model.
//!
//! The host binds a data reader and the shared winners list at start-up;
//! the view model resolves them during `initialize()`. A missing binding
//! is a configuration defect and surfaces as `MissingDependency`.

use crate::error::{Result, ViewModelError};
use people_common::SharedWinners;
use sources::PersonReader;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name the shared winners list is registered under.
pub const TODAYS_WINNERS: &str = "TodaysWinners";

/// Name reported when no reader is bound.
pub const PERSON_READER: &str = "PersonReader";

#[derive(Clone, Default)]
pub struct Container {
    reader: Option<Arc<dyn PersonReader>>,
    winners: HashMap<String, SharedWinners>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the data reader. Replaces any earlier binding.
    pub fn bind_reader(mut self, reader: Arc<dyn PersonReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Bind a named winners list.
    pub fn bind_winners(mut self, name: impl Into<String>, winners: SharedWinners) -> Self {
        self.winners.insert(name.into(), winners);
        self
    }

    pub fn resolve_reader(&self) -> Result<Arc<dyn PersonReader>> {
        self.reader
            .clone()
            .ok_or_else(|| ViewModelError::missing(PERSON_READER))
    }

    pub fn resolve_winners(&self, name: &str) -> Result<SharedWinners> {
        self.winners
            .get(name)
            .cloned()
            .ok_or_else(|| ViewModelError::missing(name))
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("reader", &self.reader.as_ref().map(|r| r.name().to_string()))
            .field("winners", &self.winners.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use people_common::Winners;
    use sources::InMemoryReader;

    #[test]
    fn test_resolve_bound_collaborators() {
        let winners = Winners::for_today().into_shared();
        let container = Container::new()
            .bind_reader(Arc::new(InMemoryReader::new(Vec::new())))
            .bind_winners(TODAYS_WINNERS, winners.clone());

        assert!(container.resolve_reader().is_ok());
        let resolved = container.resolve_winners(TODAYS_WINNERS).unwrap();
        assert!(Arc::ptr_eq(&resolved, &winners));
    }

    #[test]
    fn test_missing_bindings_name_the_dependency() {
        let container = Container::new();

        match container.resolve_reader() {
            Err(ViewModelError::MissingDependency { dependency }) => {
                assert_eq!(dependency, PERSON_READER)
            }
            other => panic!("expected MissingDependency, got {:?}", other.map(|_| ())),
        }
        match container.resolve_winners(TODAYS_WINNERS) {
            Err(ViewModelError::MissingDependency { dependency }) => {
                assert_eq!(dependency, TODAYS_WINNERS)
            }
            other => panic!("expected MissingDependency, got {:?}", other.map(|_| ())),
        }
    }
}
