//! Threshold-gated scoring of a classifier against a labeled dataset.

use serde::Serialize;

use crate::classifier::Classifier;
use crate::dataset::Example;
use crate::error::Result;

/// Aggregate metrics from scoring a labeled dataset.
///
/// Only examples whose certainty strictly exceeds the threshold count as
/// "certain"; every other tally is a subset of the certain ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMetrics {
    /// Total examples in the dataset, gated or not.
    pub dataset_size: usize,
    /// Examples whose certainty exceeded the threshold.
    pub certain_count: usize,
    /// Certain examples the classifier got wrong.
    pub incorrect_count: usize,
    /// Certain examples the classifier got right.
    pub certain_correct_count: usize,
    /// Certain, correct, and predicted positive (affirmative correct match).
    pub affirmative_correct_count: usize,
    /// Certain, incorrect, and predicted positive.
    pub false_positive_count: usize,
    /// The offending examples behind each tally, when collection was
    /// requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<ScoreSamples>,
}

impl ScoreMetrics {
    /// Accuracy among certain examples; 0 when nothing cleared the threshold.
    pub fn accuracy(&self) -> f64 {
        if self.certain_count == 0 {
            0.0
        } else {
            1.0 - self.incorrect_count as f64 / self.certain_count as f64
        }
    }
}

/// The examples behind each [`ScoreMetrics`] tally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSamples {
    /// Examples whose certainty exceeded the threshold.
    pub certain: Vec<Example>,
    /// Certain examples the classifier got wrong.
    pub incorrect: Vec<Example>,
    /// Certain examples the classifier got right.
    pub certain_correct: Vec<Example>,
    /// Certain, correct, predicted positive.
    pub affirmative_correct: Vec<Example>,
    /// Certain, incorrect, predicted positive.
    pub false_positive: Vec<Example>,
}

/// Score a classifier against a labeled dataset at a certainty threshold.
///
/// When `collect_samples` is true, each tally also carries the examples that
/// produced it. The counts and the sample lists are driven by the same
/// predicates, so `samples.certain.len() == certain_count` and so on for
/// every bucket.
pub fn score(
    classifier: &Classifier,
    dataset: &[Example],
    certainty_threshold: f64,
    collect_samples: bool,
) -> Result<ScoreMetrics> {
    let mut metrics = ScoreMetrics {
        dataset_size: dataset.len(),
        certain_count: 0,
        incorrect_count: 0,
        certain_correct_count: 0,
        affirmative_correct_count: 0,
        false_positive_count: 0,
        samples: collect_samples.then(ScoreSamples::default),
    };

    for example in dataset {
        let guess = classifier.guess(&example.text)?;
        if guess.certainty <= certainty_threshold {
            continue;
        }

        let predicted = guess.label();
        let correct = predicted == example.label;

        metrics.certain_count += 1;
        if correct {
            metrics.certain_correct_count += 1;
            if predicted {
                metrics.affirmative_correct_count += 1;
            }
        } else {
            metrics.incorrect_count += 1;
            if predicted {
                metrics.false_positive_count += 1;
            }
        }

        if let Some(samples) = metrics.samples.as_mut() {
            samples.certain.push(example.clone());
            if correct {
                samples.certain_correct.push(example.clone());
                if predicted {
                    samples.affirmative_correct.push(example.clone());
                }
            } else {
                samples.incorrect.push(example.clone());
                if predicted {
                    samples.false_positive.push(example.clone());
                }
            }
        }
    }

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::WhitespaceTokenizer;
    use crate::classifier::Classifier;

    fn sentiment_classifier() -> Classifier {
        let dataset = vec![
            Example::new("good great awesome", true),
            Example::new("bad terrible awful", false),
        ];
        Classifier::from_dataset(&dataset, Arc::new(WhitespaceTokenizer::new())).unwrap()
    }

    fn eval_dataset() -> Vec<Example> {
        vec![
            Example::new("good great", true),
            Example::new("bad awful", false),
            Example::new("good terrible", true),
            Example::new("xyz unknown", false),
        ]
    }

    #[test]
    fn test_score_counts() {
        let classifier = sentiment_classifier();
        let metrics = score(&classifier, &eval_dataset(), 0.1, false).unwrap();

        assert_eq!(metrics.dataset_size, 4);
        // "good terrible" has balanced evidence and "xyz unknown" has none;
        // neither clears the threshold
        assert_eq!(metrics.certain_count, 2);
        assert_eq!(metrics.certain_correct_count, 2);
        assert_eq!(metrics.incorrect_count, 0);
        assert_eq!(metrics.affirmative_correct_count, 1);
        assert_eq!(metrics.false_positive_count, 0);
        assert_eq!(metrics.accuracy(), 1.0);
        assert!(metrics.samples.is_none());
    }

    #[test]
    fn test_score_sample_collection_mirrors_counts() {
        let classifier = sentiment_classifier();
        let dataset = vec![
            Example::new("good great", true),
            // Mislabeled on purpose: classifier will be certain and wrong
            Example::new("good great awesome", false),
            Example::new("bad awful", false),
        ];
        let metrics = score(&classifier, &dataset, 0.1, true).unwrap();
        let samples = metrics.samples.as_ref().unwrap();

        assert_eq!(samples.certain.len(), metrics.certain_count);
        assert_eq!(samples.incorrect.len(), metrics.incorrect_count);
        assert_eq!(samples.certain_correct.len(), metrics.certain_correct_count);
        assert_eq!(
            samples.affirmative_correct.len(),
            metrics.affirmative_correct_count
        );
        assert_eq!(samples.false_positive.len(), metrics.false_positive_count);

        assert_eq!(metrics.incorrect_count, 1);
        assert_eq!(metrics.false_positive_count, 1);
        assert_eq!(samples.false_positive[0].text, "good great awesome");
    }

    #[test]
    fn test_score_unreachable_threshold_zeroes_all_tallies() {
        let classifier = sentiment_classifier();
        let metrics = score(&classifier, &eval_dataset(), 1.1, false).unwrap();

        assert_eq!(metrics.dataset_size, 4);
        assert_eq!(metrics.certain_count, 0);
        assert_eq!(metrics.incorrect_count, 0);
        assert_eq!(metrics.certain_correct_count, 0);
        assert_eq!(metrics.affirmative_correct_count, 0);
        assert_eq!(metrics.false_positive_count, 0);
        assert_eq!(metrics.accuracy(), 0.0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let classifier = sentiment_classifier();
        let dataset = eval_dataset();

        let first = score(&classifier, &dataset, 0.25, false).unwrap();
        let second = score(&classifier, &dataset, 0.25, false).unwrap();
        assert_eq!(first, second);
    }
}
