//! Serialized classifier state.
//!
//! Snapshots are plain serde types: the classifier produces one on demand and
//! adopts one verbatim at restore time. The JSON field names match the
//! persisted format of earlier implementations (`totalPositiveBits`,
//! `bitClass`, ...) so existing snapshot files load unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerdictError};

/// Persisted state for a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSnapshot {
    /// Positive-labeled example count.
    pub positive: u64,
    /// Negative-labeled example count.
    pub negative: u64,
    /// Total sightings during learning.
    pub count: u64,
    /// Confidence weight. Snapshots written before weighted retraining
    /// existed omit this field; it defaults to 1.0.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Derived positive likelihood at snapshot time.
    pub positive_probability: f64,
    /// Derived negative likelihood at snapshot time.
    pub negative_probability: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// The full persisted state of a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierSnapshot {
    /// Sum of positive counts across all tokens.
    pub total_positive_bits: u64,
    /// Sum of negative counts across all tokens.
    pub total_negative_bits: u64,
    /// Tokens first seen under a positive label.
    pub unique_positive_bits: u64,
    /// Tokens first seen under a negative label.
    pub unique_negative_bits: u64,
    /// Positive-labeled examples learned.
    pub total_positive_inputs: u64,
    /// Negative-labeled examples learned.
    pub total_negative_inputs: u64,
    /// Total examples learned.
    pub total_inputs: u64,
    /// Class prior for the positive class at snapshot time.
    pub positive_probability: f64,
    /// Class prior for the negative class at snapshot time.
    pub negative_probability: f64,
    /// Per-token persisted state, keyed by token text.
    pub bit_class: HashMap<String, TokenSnapshot>,
}

impl ClassifierSnapshot {
    /// Check the snapshot's internal consistency.
    ///
    /// Restoration adopts all fields verbatim without recomputation, so a
    /// snapshot whose counters disagree would produce a classifier that
    /// silently violates its own invariants.
    pub fn validate(&self) -> Result<()> {
        if self.total_inputs != self.total_positive_inputs + self.total_negative_inputs {
            return Err(VerdictError::snapshot(format!(
                "total inputs {} != positive {} + negative {}",
                self.total_inputs, self.total_positive_inputs, self.total_negative_inputs
            )));
        }

        let positive_sum: u64 = self.bit_class.values().map(|t| t.positive).sum();
        let negative_sum: u64 = self.bit_class.values().map(|t| t.negative).sum();
        if positive_sum != self.total_positive_bits || negative_sum != self.total_negative_bits {
            return Err(VerdictError::snapshot(format!(
                "token counts ({positive_sum}, {negative_sum}) disagree with totals ({}, {})",
                self.total_positive_bits, self.total_negative_bits
            )));
        }

        for (token, record) in &self.bit_class {
            if !(0.0..=1.0).contains(&record.weight) {
                return Err(VerdictError::snapshot(format!(
                    "token {token:?} has weight {} outside [0, 1]",
                    record.weight
                )));
            }
        }

        Ok(())
    }
}
