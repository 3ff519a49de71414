//! Capability contracts plugins implement.

use async_trait::async_trait;
use evosuite_core::{Candidate, EvaluationContext, EvaluationResult};
use std::sync::Arc;

/// Scores candidates.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Score one candidate.
    ///
    /// Must not modify the candidate it is given. May suspend, e.g. for
    /// out-of-process scoring; the loop awaits each call to completion
    /// before issuing the next.
    async fn evaluate(
        &self,
        candidate: &Candidate,
        ctx: &EvaluationContext,
    ) -> Result<EvaluationResult, anyhow::Error>;
}

/// Produces variations of candidates.
#[async_trait]
pub trait Mutator: Send + Sync {
    /// Derive a new candidate from an existing one.
    ///
    /// The input is the prior generation's elite and may not have been
    /// evaluated in this call's context.
    async fn mutate(
        &self,
        candidate: &Candidate,
        ctx: &EvaluationContext,
    ) -> Result<Candidate, anyhow::Error>;
}

/// A capability tag, declared by a plugin at registration time.
///
/// Plugins declare what they implement instead of being probed for it;
/// there is no runtime type introspection anywhere in the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The plugin scores candidates
    Evaluator,
    /// The plugin produces candidate variations
    Mutator,
}

impl Capability {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Evaluator => "evaluator",
            Capability::Mutator => "mutator",
        }
    }
}

/// A declared capability together with its implementation handle.
#[derive(Clone)]
pub enum CapabilityHandle {
    /// An evaluator implementation
    Evaluator(Arc<dyn Evaluator>),
    /// A mutator implementation
    Mutator(Arc<dyn Mutator>),
}

impl CapabilityHandle {
    /// The tag without the handle.
    pub fn capability(&self) -> Capability {
        match self {
            CapabilityHandle::Evaluator(_) => Capability::Evaluator,
            CapabilityHandle::Mutator(_) => Capability::Mutator,
        }
    }
}

impl std::fmt::Debug for CapabilityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.capability().as_str())
    }
}
