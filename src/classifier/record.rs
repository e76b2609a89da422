//! Per-token statistics and the shared token table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Statistics accumulated for one distinct token.
///
/// A record exists for a token iff that token has appeared in at least one
/// learned example, so `positive + negative >= 1` once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Number of positive-labeled examples containing this token.
    pub positive: u64,
    /// Number of negative-labeled examples containing this token.
    pub negative: u64,
    /// Total times this token was processed during learning (diagnostic only).
    pub count: u64,
    /// Multiplicative confidence factor in `[0, 1]`, adjusted only by `train`.
    pub weight: f64,
    /// `positive / total positive token occurrences`, recomputed after each
    /// batch of learning.
    pub positive_likelihood: f64,
    /// `negative / total negative token occurrences`, recomputed after each
    /// batch of learning.
    pub negative_likelihood: f64,
}

impl Default for TokenRecord {
    fn default() -> Self {
        TokenRecord {
            positive: 0,
            negative: 0,
            count: 0,
            weight: 1.0,
            positive_likelihood: 0.0,
            negative_likelihood: 0.0,
        }
    }
}

impl TokenRecord {
    /// Disagreement magnitude between the class counts, in `[0, 1]`.
    ///
    /// `|positive - negative| / max(positive, negative)`, defined as 0 when
    /// the counts are equal (including the zero/zero case).
    pub fn disagreement(&self) -> f64 {
        if self.positive == self.negative {
            return 0.0;
        }
        let diff = self.positive.abs_diff(self.negative) as f64;
        diff / self.positive.max(self.negative) as f64
    }
}

/// The token statistics table: every distinct token ever observed, plus the
/// aggregate totals that normalize the per-token likelihoods.
#[derive(Clone, Debug, Default)]
pub struct TokenTable {
    records: AHashMap<String, TokenRecord>,
    /// Tokens whose first observed label was positive (diagnostic).
    unique_positive: u64,
    /// Tokens whose first observed label was negative (diagnostic).
    unique_negative: u64,
    /// Sum of `positive` across all records.
    total_positive_occurrences: u64,
    /// Sum of `negative` across all records.
    total_negative_occurrences: u64,
}

impl TokenTable {
    /// Create an empty table.
    pub fn new() -> Self {
        TokenTable::default()
    }

    /// Rebuild a table from restored state, adopting all fields verbatim.
    pub(crate) fn from_parts(
        records: AHashMap<String, TokenRecord>,
        unique_positive: u64,
        unique_negative: u64,
        total_positive_occurrences: u64,
        total_negative_occurrences: u64,
    ) -> Self {
        TokenTable {
            records,
            unique_positive,
            unique_negative,
            total_positive_occurrences,
            total_negative_occurrences,
        }
    }

    /// Record one sighting of `token` in an example with the given label.
    ///
    /// Creates the record on first sighting, then increments the matching
    /// class counter, the occurrence count, and the aggregate totals.
    pub fn observe(&mut self, token: &str, label: bool) {
        if !self.records.contains_key(token) {
            if label {
                self.unique_positive += 1;
            } else {
                self.unique_negative += 1;
            }
        }

        let record = self.records.entry(token.to_string()).or_default();
        if label {
            record.positive += 1;
            self.total_positive_occurrences += 1;
        } else {
            record.negative += 1;
            self.total_negative_occurrences += 1;
        }
        record.count += 1;
    }

    /// Recompute every record's likelihoods from the aggregate totals.
    ///
    /// A class with zero total occurrences yields likelihood 0.0 for every
    /// token, so an all-one-class dataset never produces NaN.
    pub fn recompute_likelihoods(&mut self) {
        let positive_total = self.total_positive_occurrences as f64;
        let negative_total = self.total_negative_occurrences as f64;

        for record in self.records.values_mut() {
            record.positive_likelihood = if positive_total == 0.0 {
                0.0
            } else {
                record.positive as f64 / positive_total
            };
            record.negative_likelihood = if negative_total == 0.0 {
                0.0
            } else {
                record.negative as f64 / negative_total
            };
        }
    }

    /// Look up the record for a token.
    pub fn get(&self, token: &str) -> Option<&TokenRecord> {
        self.records.get(token)
    }

    /// Look up the record for a token, mutably.
    pub fn get_mut(&mut self, token: &str) -> Option<&mut TokenRecord> {
        self.records.get_mut(token)
    }

    /// Iterate over all (token, record) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenRecord)> {
        self.records.iter()
    }

    /// Number of distinct tokens in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tokens first seen under a positive label.
    pub fn unique_positive(&self) -> u64 {
        self.unique_positive
    }

    /// Tokens first seen under a negative label.
    pub fn unique_negative(&self) -> u64 {
        self.unique_negative
    }

    /// Sum of positive counts across all tokens.
    pub fn total_positive_occurrences(&self) -> u64 {
        self.total_positive_occurrences
    }

    /// Sum of negative counts across all tokens.
    pub fn total_negative_occurrences(&self) -> u64 {
        self.total_negative_occurrences
    }
}
