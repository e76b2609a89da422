//! The classifier itself: construction, learning, inference, and weight
//! correction.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::Tokenizer;
use crate::classifier::record::{TokenRecord, TokenTable};
use crate::classifier::snapshot::{ClassifierSnapshot, TokenSnapshot};
use crate::dataset::Example;
use crate::error::{Result, VerdictError};

/// Learning rate used by [`Classifier::train`].
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// The outcome of a single inference.
///
/// Scores are additive accumulations of weighted per-token likelihoods, not
/// probabilities: repeated or numerous tokens raise a score instead of
/// collapsing a product toward zero, and positive and negative evidence can
/// coexist without forcing each other to cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guess {
    /// Accumulated positive evidence.
    pub positive: f64,
    /// Accumulated negative evidence.
    pub negative: f64,
    /// Derived scalar in `[0, 1]` combining recognized-token coverage with
    /// how lopsided the recognized evidence is. Not a calibrated probability.
    pub certainty: f64,
    /// Input tokens that were found in the table.
    pub known_tokens: usize,
    /// Total input tokens, recognized or not.
    pub total_tokens: usize,
}

impl Guess {
    /// The decided label: positive wins strictly, ties resolve to `false`.
    pub fn label(&self) -> bool {
        self.positive > self.negative
    }

    /// Fraction of the input tokens that were recognized; 0 for an empty
    /// token sequence.
    pub fn known_fraction(&self) -> f64 {
        if self.total_tokens == 0 {
            0.0
        } else {
            self.known_tokens as f64 / self.total_tokens as f64
        }
    }
}

/// A binary text classifier based on a modified Naive Bayes model.
///
/// Holds the token statistics table and the aggregate example counts, plus an
/// injected tokenizer reused for every learn/guess/train call. All mutation
/// goes through `&mut self`, so exclusive access is enforced at compile time;
/// callers that share a classifier across threads own the locking.
pub struct Classifier {
    tokenizer: Arc<dyn Tokenizer>,
    table: TokenTable,
    total_positive_examples: u64,
    total_negative_examples: u64,
    total_examples: u64,
    positive_prior: f64,
    negative_prior: f64,
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("tokenizer", &self.tokenizer.name())
            .field("distinct_tokens", &self.table.len())
            .field("total_examples", &self.total_examples)
            .finish()
    }
}

impl Classifier {
    /// Bulk-train a new classifier from a labeled dataset.
    ///
    /// Every token of every example is observed under the example's label,
    /// then likelihoods and class priors are computed once at the end.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::InvalidInput`] if the dataset is empty.
    pub fn from_dataset(dataset: &[Example], tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        if dataset.is_empty() {
            return Err(VerdictError::invalid_input("training dataset is empty"));
        }

        let mut classifier = Classifier {
            tokenizer,
            table: TokenTable::new(),
            total_positive_examples: 0,
            total_negative_examples: 0,
            total_examples: 0,
            positive_prior: 0.0,
            negative_prior: 0.0,
        };

        for example in dataset {
            classifier.observe_example(&example.text, example.label)?;
        }

        classifier.table.recompute_likelihoods();
        classifier.recompute_priors();

        Ok(classifier)
    }

    /// Restore a classifier from a previously persisted snapshot.
    ///
    /// All fields are adopted verbatim with no recomputation. The tokenizer
    /// is not persisted and must be supplied fresh.
    ///
    /// # Errors
    ///
    /// Returns [`VerdictError::Snapshot`] if the snapshot's counters are
    /// internally inconsistent.
    pub fn from_snapshot(snapshot: ClassifierSnapshot, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        snapshot.validate()?;

        let records: AHashMap<String, TokenRecord> = snapshot
            .bit_class
            .into_iter()
            .map(|(token, entry)| {
                (
                    token,
                    TokenRecord {
                        positive: entry.positive,
                        negative: entry.negative,
                        count: entry.count,
                        weight: entry.weight,
                        positive_likelihood: entry.positive_probability,
                        negative_likelihood: entry.negative_probability,
                    },
                )
            })
            .collect();

        let table = TokenTable::from_parts(
            records,
            snapshot.unique_positive_bits,
            snapshot.unique_negative_bits,
            snapshot.total_positive_bits,
            snapshot.total_negative_bits,
        );

        Ok(Classifier {
            tokenizer,
            table,
            total_positive_examples: snapshot.total_positive_inputs,
            total_negative_examples: snapshot.total_negative_inputs,
            total_examples: snapshot.total_inputs,
            positive_prior: snapshot.positive_probability,
            negative_prior: snapshot.negative_probability,
        })
    }

    /// Learn a single labeled example online.
    ///
    /// Recomputes likelihoods over the whole table afterwards, so a call
    /// costs O(tokens in text + distinct tokens in table).
    pub fn learn(&mut self, text: &str, label: bool) -> Result<()> {
        self.observe_example(text, label)?;
        self.table.recompute_likelihoods();
        self.recompute_priors();
        Ok(())
    }

    /// Estimate the positive/negative scores and certainty for a phrase.
    ///
    /// Tokens absent from the table contribute nothing. An empty token
    /// sequence, or one made entirely of unknown tokens, yields certainty 0
    /// without dividing by zero.
    pub fn guess(&self, text: &str) -> Result<Guess> {
        let tokens = self.tokens(text)?;

        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut known = 0usize;

        for token in &tokens {
            if let Some(record) = self.table.get(token) {
                positive += record.positive_likelihood * record.weight;
                negative += record.negative_likelihood * record.weight;
                known += 1;
            }
        }

        let known_fraction = if tokens.is_empty() {
            0.0
        } else {
            known as f64 / tokens.len() as f64
        };

        // Both scores zero means no informative tokens were found; certainty
        // is 0 regardless of coverage.
        let normalizer = positive.max(negative).min(1.0);
        let certainty = if normalizer == 0.0 {
            0.0
        } else {
            known_fraction * (positive - negative).abs() / normalizer
        };

        Ok(Guess {
            positive,
            negative,
            certainty,
            known_tokens: known,
            total_tokens: tokens.len(),
        })
    }

    /// Classify a phrase, returning the decided label and the certainty.
    pub fn guess_label(&self, text: &str) -> Result<(bool, f64)> {
        let guess = self.guess(text)?;
        Ok((guess.label(), guess.certainty))
    }

    /// Supervised weight correction with the default learning rate.
    pub fn train(&mut self, text: &str, label: bool) -> Result<()> {
        self.train_with_rate(text, label, DEFAULT_LEARNING_RATE)
    }

    /// Supervised weight correction.
    ///
    /// When the current prediction for `text` disagrees with `label`, every
    /// known token's weight is decreased by its disagreement magnitude times
    /// `learning_rate` and clamped into `[0, 1]`. Correct predictions leave
    /// all weights untouched: the correction only punishes, never rewards.
    /// Likelihoods are not recomputed.
    pub fn train_with_rate(&mut self, text: &str, label: bool, learning_rate: f64) -> Result<()> {
        let guessed = self.guess(text)?.label();
        if guessed == label {
            return Ok(());
        }

        for token in self.tokens(text)? {
            if let Some(record) = self.table.get_mut(&token) {
                let token_certainty = record.disagreement();
                record.weight = (record.weight - token_certainty * learning_rate).clamp(0.0, 1.0);
            }
        }

        Ok(())
    }

    /// Produce a plain snapshot of the full classifier state.
    pub fn snapshot(&self) -> ClassifierSnapshot {
        let bit_class = self
            .table
            .iter()
            .map(|(token, record)| {
                (
                    token.clone(),
                    TokenSnapshot {
                        positive: record.positive,
                        negative: record.negative,
                        count: record.count,
                        weight: record.weight,
                        positive_probability: record.positive_likelihood,
                        negative_probability: record.negative_likelihood,
                    },
                )
            })
            .collect();

        ClassifierSnapshot {
            total_positive_bits: self.table.total_positive_occurrences(),
            total_negative_bits: self.table.total_negative_occurrences(),
            unique_positive_bits: self.table.unique_positive(),
            unique_negative_bits: self.table.unique_negative(),
            total_positive_inputs: self.total_positive_examples,
            total_negative_inputs: self.total_negative_examples,
            total_inputs: self.total_examples,
            positive_probability: self.positive_prior,
            negative_probability: self.negative_prior,
            bit_class,
        }
    }

    /// The token statistics table.
    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    /// Positive-labeled examples learned so far.
    pub fn total_positive_examples(&self) -> u64 {
        self.total_positive_examples
    }

    /// Negative-labeled examples learned so far.
    pub fn total_negative_examples(&self) -> u64 {
        self.total_negative_examples
    }

    /// Total examples learned so far.
    pub fn total_examples(&self) -> u64 {
        self.total_examples
    }

    /// Class prior for the positive class.
    pub fn positive_prior(&self) -> f64 {
        self.positive_prior
    }

    /// Class prior for the negative class.
    pub fn negative_prior(&self) -> f64 {
        self.negative_prior
    }

    /// Tokenize a phrase into plain token texts.
    fn tokens(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenizer
            .tokenize(text)?
            .map(|token| token.text)
            .collect())
    }

    /// Observe every token of one example and bump the example counters.
    fn observe_example(&mut self, text: &str, label: bool) -> Result<()> {
        for token in self.tokens(text)? {
            self.table.observe(&token, label);
        }

        if label {
            self.total_positive_examples += 1;
        } else {
            self.total_negative_examples += 1;
        }
        self.total_examples += 1;

        Ok(())
    }

    /// Recompute the class priors from the example counters.
    fn recompute_priors(&mut self) {
        if self.total_examples == 0 {
            self.positive_prior = 0.0;
            self.negative_prior = 0.0;
        } else {
            let total = self.total_examples as f64;
            self.positive_prior = self.total_positive_examples as f64 / total;
            self.negative_prior = self.total_negative_examples as f64 / total;
        }
    }
}
