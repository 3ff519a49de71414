//! Per-generation outcome record.

use crate::{Candidate, Time};
use serde::{Deserialize, Serialize};

/// What one generation produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation index (0-based)
    pub index: usize,

    /// Every input candidate with its total score, in population order
    pub evaluations: Vec<(Candidate, f64)>,

    /// The elite candidate carried into the next generation
    pub best: Candidate,

    /// The elite's total score
    pub best_score: f64,

    /// When the generation finished
    pub completed_at: Time,
}
