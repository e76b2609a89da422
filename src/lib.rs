//! # Verdict
//!
//! A binary text classifier for Rust, based on a modified Naive Bayes model.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Additive weighted evidence accumulation instead of classical probability products
//! - Certainty scoring that combines token coverage with evidence lopsidedness
//! - Online learning and supervised weight correction
//! - Batch evaluation and repeated self-training with early stopping
//! - JSON snapshot persistence, blocking or async

pub mod analysis;
pub mod classifier;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod persist;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
