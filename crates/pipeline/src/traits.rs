//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a list of people.

use people_common::Person;

/// Core trait for filtering people.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Person> and return a filtered Vec
/// - Filters must keep the relative order of the people they let through
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of people.
    fn apply(&self, people: Vec<Person>) -> Vec<Person>;
}
