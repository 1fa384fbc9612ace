//! Error types for the presentation crate.
//!
//! Two very different kinds of failure end up here:
//! - start-up configuration defects (`MissingDependency`), returned
//!   straight from `initialize()`
//! - data source failures (`Provider`), captured into the view model's
//!   fault state and then handed back to whoever pumps completions

use sources::ReaderError;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the people view model
#[derive(Error, Debug)]
pub enum ViewModelError {
    /// A required collaborator was not bound in the container
    #[error("{dependency} is not available from the container")]
    MissingDependency { dependency: String },

    /// An operation that needs the reader or winners ran before `initialize()`
    #[error("View model has not been initialized")]
    NotInitialized,

    /// `initialize()` was called outside a tokio runtime
    #[error("View model must be initialized inside a tokio runtime")]
    NoRuntime,

    /// The data reader failed; the same error is kept as the fault state
    #[error("Data reader failed: {0}")]
    Provider(#[source] Arc<ReaderError>),
}

impl ViewModelError {
    pub fn missing(dependency: impl Into<String>) -> Self {
        ViewModelError::MissingDependency {
            dependency: dependency.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ViewModelError>;
