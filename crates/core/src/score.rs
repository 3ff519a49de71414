//! Score report returned by an evaluator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A structured score report for one candidate.
///
/// The loop only reads `total_score`; sub-scores are carried through for
/// presentation and debugging but never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Scalar fitness, higher is better
    pub total_score: f64,

    /// Named component scores
    pub sub_scores: HashMap<String, f64>,
}

impl EvaluationResult {
    /// Create a result with only a total score.
    pub fn from_score(total_score: f64) -> Self {
        Self {
            total_score,
            sub_scores: HashMap::new(),
        }
    }

    /// Attach a named sub-score.
    pub fn with_sub_score(mut self, name: impl Into<String>, value: f64) -> Self {
        self.sub_scores.insert(name.into(), value);
        self
    }
}
