//! # Sources Crate
//!
//! Data sources that hand out people to the presentation layer.
//!
//! ## Components
//!
//! ### `PersonReader`
//! The data-provider capability: fetch every person, or one by id. Both
//! calls are asynchronous and may fail with a [`ReaderError`].
//!
//! ### Readers
//! - `InMemoryReader`: a fixed list, used by tests and the demo sample
//! - `JsonFileReader`: re-reads a JSON file on every fetch
//!
//! ### Decorators
//! - `DelayedReader`: waits before answering (slow service)
//! - `FailingReader`: always fails
//! - `FlakyReader`: fails a configurable share of fetches
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{DelayedReader, InMemoryReader, PersonReader, sample::sample_people};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let memory: Arc<dyn PersonReader> = Arc::new(InMemoryReader::new(sample_people()));
//! let slow = DelayedReader::new(memory, Duration::from_millis(500));
//! let people = slow.get_people().await?;
//! ```

// Public modules
pub mod decorators;
pub mod error;
pub mod file;
pub mod memory;
pub mod reader;
pub mod sample;

// Re-export commonly used types
pub use decorators::{DelayedReader, FailingReader, FlakyReader};
pub use error::{ReaderError, Result};
pub use file::JsonFileReader;
pub use memory::InMemoryReader;
pub use reader::PersonReader;
