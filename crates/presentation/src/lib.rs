//! Presentation layer for the People Viewer.
//!
//! This crate holds the people view model and the small pieces it is
//! built from: the service container it resolves collaborators from,
//! property change notification, and the clock behind the cache window.

pub mod clock;
pub mod container;
pub mod error;
pub mod notify;
pub mod tracker;
pub mod view_model;

pub use clock::{Clock, ManualClock, SystemClock};
pub use container::{Container, PERSON_READER, TODAYS_WINNERS};
pub use error::{Result, ViewModelError};
pub use notify::{Notifier, Property, SubscriptionId};
pub use tracker::ChangeTracker;
pub use view_model::{CACHE_WINDOW, PeopleViewModel};
