//! Filter implementations for the people pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod decade_exclusion;

// Re-export for convenience
pub use decade_exclusion::DecadeExclusionFilter;
