//! Optimization loop - drives populations through evaluate → select →
//! reproduce generations using discovered plugins.

#![warn(missing_docs)]

mod engine;

pub use engine::{EngineConfig, EvolutionEngine, RunOutcome};
