//! EvoSuite core data models.
//!
//! This crate defines the generation bookkeeping types shared by the
//! plugin contracts and the optimization loop.

#![warn(missing_docs)]

// Candidates and per-call data
mod candidate;
mod context;
mod score;

// Generation bookkeeping
mod population;
mod report;

pub use candidate::Candidate;
pub use context::EvaluationContext;
pub use population::Population;
pub use report::GenerationReport;
pub use score::EvaluationResult;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
