//! Batch evaluation and repeated self-training.
//!
//! [`score`] measures a classifier against a labeled dataset at a certainty
//! threshold, which is how decision thresholds get tuned;
//! [`additional_training`] runs shuffled self-training epochs that feed the
//! classifier's weight correction.

pub mod score;
pub mod training;

pub use score::{ScoreMetrics, ScoreSamples, score};
pub use training::{TrainingSummary, additional_training};
