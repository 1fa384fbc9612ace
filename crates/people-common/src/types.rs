//! Core domain types shared by every crate in the workspace.
//!
//! A `Person` is an immutable record handed out by a data source. Two
//! people are the same person when their ids match, whatever the other
//! fields say.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a person
pub type PersonId = i32;

// =============================================================================
// Person
// =============================================================================

/// A single person record as returned by a data source.
///
/// Equality and hashing only look at `id`, so a record fetched twice (or
/// constructed by hand with the same id) is treated as the same person by
/// the selection set and by `contains` checks in the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub given_name: String,
    pub family_name: String,
    pub start_date: NaiveDate,
    pub rating: i32,
    /// Display template; `{0}` is the given name, `{1}` the family name.
    ///
    /// Empty means "use the default `Given Family` layout".
    #[serde(default)]
    pub format_string: String,
}

impl Person {
    /// Create a person with the default display layout.
    pub fn new(
        id: PersonId,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        start_date: NaiveDate,
        rating: i32,
    ) -> Self {
        Self {
            id,
            given_name: given_name.into(),
            family_name: family_name.into(),
            start_date,
            rating,
            format_string: String::new(),
        }
    }

    /// Use a custom display template (builder style).
    pub fn with_format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = format_string.into();
        self
    }

    /// Year the person started.
    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    /// First year of the decade the start date falls in (1971 -> 1970).
    pub fn decade(&self) -> i32 {
        self.start_year().div_euclid(10) * 10
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.format_string.is_empty() {
            return write!(f, "{} {}", self.given_name, self.family_name);
        }
        let rendered = self
            .format_string
            .replace("{0}", &self.given_name)
            .replace("{1}", &self.family_name);
        f.write_str(&rendered)
    }
}
