//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::decade::FilterState;
use crate::filters::DecadeExclusionFilter;
use crate::traits::Filter;
use people_common::Person;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DecadeExclusionFilter::new(Decade::Seventies))
///     .add_filter(DecadeExclusionFilter::new(Decade::TwentyTens));
///
/// let visible = pipeline.apply(people);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a toggle set: one exclusion per decade that
    /// is switched off.
    pub fn from_state(state: &FilterState) -> Self {
        state
            .excluded()
            .fold(Self::new(), |pipeline, decade| {
                pipeline.add_filter(DecadeExclusionFilter::new(decade))
            })
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the people.
    pub fn apply(&self, people: Vec<Person>) -> Vec<Person> {
        let mut current = people;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current);
            debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
