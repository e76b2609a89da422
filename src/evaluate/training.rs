//! Repeated self-training over a labeled dataset.

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::classifier::Classifier;
use crate::dataset::Example;
use crate::error::Result;

/// Summary of a self-training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSummary {
    /// Epochs actually executed.
    pub epochs_run: usize,
    /// Accuracy observed during each executed epoch.
    pub epoch_accuracy: Vec<f64>,
    /// Whether the run terminated before `epochs` because accuracy stopped
    /// improving.
    pub stopped_early: bool,
}

/// Run up to `epochs` rounds of shuffled self-training.
///
/// Each epoch shuffles the dataset in place (uniform Fisher-Yates), then for
/// every example guesses, tallies correctness, and applies weight correction
/// with a learning rate that grows with the fraction of wrong answers seen so
/// far in the epoch, scaled by the 1-based epoch index. With `stop_if_worse`
/// the loop terminates at the first epoch whose accuracy fails to improve on
/// the previous epoch's.
///
/// There is no mid-epoch cancellation point; the epoch boundary is the only
/// safe place to stop.
pub fn additional_training(
    classifier: &mut Classifier,
    dataset: &mut [Example],
    epochs: usize,
    stop_if_worse: bool,
) -> Result<TrainingSummary> {
    let mut rng = rand::rng();
    let mut summary = TrainingSummary {
        epochs_run: 0,
        epoch_accuracy: Vec::with_capacity(epochs),
        stopped_early: false,
    };
    let mut previous_accuracy = 0.0;

    for epoch in 0..epochs {
        dataset.shuffle(&mut rng);

        let mut right = 0usize;
        let mut wrong = 0usize;

        for example in dataset.iter() {
            let guess = classifier.guess(&example.text)?;
            if guess.label() == example.label {
                right += 1;
            } else {
                wrong += 1;
            }

            let seen = (right + wrong) as f64;
            let rate = (wrong as f64 / seen) * (epoch as f64 + 1.0) / 100.0;
            classifier.train_with_rate(&example.text, example.label, rate)?;
        }

        let accuracy = if dataset.is_empty() {
            0.0
        } else {
            right as f64 / dataset.len() as f64
        };
        summary.epochs_run += 1;
        summary.epoch_accuracy.push(accuracy);

        if stop_if_worse {
            if previous_accuracy >= accuracy {
                summary.stopped_early = summary.epochs_run < epochs;
                break;
            }
            previous_accuracy = accuracy;
        }
    }

    Ok(summary)
}
