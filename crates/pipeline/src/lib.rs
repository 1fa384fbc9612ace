//! Decade filtering for the people view.
//!
//! This crate provides:
//! - `Decade` and `FilterState`, the five include toggles
//! - Filter trait and the decade exclusion filter
//! - FilterPipeline for composing filters
//! - `derive_visible`, the pure function the view model calls
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{derive_visible, Decade, FilterState};
//!
//! let mut state = FilterState::default();
//! state.set(Decade::Seventies, false);
//! let visible = derive_visible(&snapshot, &state);
//! ```

pub mod decade;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;
pub mod visible;

// Re-export main types
pub use decade::{Decade, FilterState};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
pub use visible::derive_visible;
