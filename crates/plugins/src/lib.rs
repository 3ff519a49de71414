//! Plugin Capability Model
//!
//! Plugins advertise Evaluator/Mutator capabilities through an explicit,
//! ordered catalog; the registry instantiates every entry and isolates
//! per-entry load failures.

#![warn(missing_docs)]

pub mod r#trait;
pub mod catalog;
pub mod registry;
pub mod builtin;

pub use r#trait::{Capability, CapabilityHandle, Evaluator, Mutator};
pub use catalog::{PluginCatalog, PluginFactory};
pub use registry::{LoadStatus, PluginRecord, PluginRegistry};
pub use builtin::{SuffixMutator, TargetLengthEvaluator};
