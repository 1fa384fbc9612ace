//! # People Common Crate
//!
//! Domain types shared by the data sources, the filter pipeline and the
//! presentation layer.
//!
//! ## Main Components
//!
//! - **types**: `Person` and its id alias
//! - **winners**: `Winners`, the day's selection of people
//!
//! ## Example Usage
//!
//! ```ignore
//! use people_common::{Person, Winners};
//! use chrono::NaiveDate;
//!
//! let person = Person::new(1, "John", "Smith", NaiveDate::from_ymd_opt(2000, 10, 1).unwrap(), 7);
//! let mut winners = Winners::for_today();
//! winners.add(Some(&person));
//! ```

pub mod types;
pub mod winners;

pub use types::{Person, PersonId};
pub use winners::{ObserverId, SelectionChange, SharedWinners, Winners};
