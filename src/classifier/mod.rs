//! The classifier core: per-token statistics, inference, learning, snapshots.
//!
//! # Architecture
//!
//! - [`TokenTable`]: per-token counters and derived likelihoods, the central
//!   shared state
//! - [`Classifier`]: owns the table and the aggregate counts; exposes
//!   `learn`, `train`, `guess`, `guess_label`
//! - [`ClassifierSnapshot`]: plain serde representation of the full state for
//!   persistence
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use verdict::analysis::WhitespaceTokenizer;
//! use verdict::classifier::Classifier;
//! use verdict::dataset::Example;
//!
//! # fn main() -> verdict::error::Result<()> {
//! let dataset = vec![
//!     Example::new("good great awesome", true),
//!     Example::new("bad terrible awful", false),
//! ];
//!
//! let mut classifier = Classifier::from_dataset(&dataset, Arc::new(WhitespaceTokenizer::new()))?;
//!
//! let (label, certainty) = classifier.guess_label("good")?;
//! assert!(label);
//! assert!(certainty > 0.0);
//!
//! classifier.learn("awesome fantastic", true)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod record;
pub mod snapshot;

pub use core::{Classifier, DEFAULT_LEARNING_RATE, Guess};
pub use record::{TokenRecord, TokenTable};
pub use snapshot::{ClassifierSnapshot, TokenSnapshot};
