//! Built-in example plugins.
//!
//! Deterministic demo implementations used by the CLI and tests. The
//! harness depends only on the capability contracts; nothing here is
//! required for a real deployment.

use crate::{r#trait::*, CapabilityHandle};
use async_trait::async_trait;
use evosuite_core::{Candidate, EvaluationContext, EvaluationResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scores candidates by how close their identifier length is to a target.
pub struct TargetLengthEvaluator {
    target: usize,
}

impl TargetLengthEvaluator {
    /// Create an evaluator aiming at the given identifier length.
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    /// Capability handles for catalog registration.
    pub fn capabilities(self) -> Vec<CapabilityHandle> {
        vec![CapabilityHandle::Evaluator(Arc::new(self))]
    }
}

#[async_trait]
impl Evaluator for TargetLengthEvaluator {
    async fn evaluate(
        &self,
        candidate: &Candidate,
        _ctx: &EvaluationContext,
    ) -> Result<EvaluationResult, anyhow::Error> {
        let distance = candidate.id().chars().count().abs_diff(self.target);
        let score = 1.0 / (1.0 + distance as f64);

        Ok(EvaluationResult::from_score(score).with_sub_score("length_distance", distance as f64))
    }
}

/// Derives candidates by appending a generation-stamped suffix.
pub struct SuffixMutator {
    counter: AtomicUsize,
}

impl SuffixMutator {
    /// Create a mutator with its variant counter at zero.
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }

    /// Capability handles for catalog registration.
    pub fn capabilities(self) -> Vec<CapabilityHandle> {
        vec![CapabilityHandle::Mutator(Arc::new(self))]
    }
}

#[async_trait]
impl Mutator for SuffixMutator {
    async fn mutate(
        &self,
        candidate: &Candidate,
        ctx: &EvaluationContext,
    ) -> Result<Candidate, anyhow::Error> {
        let variant = self.counter.fetch_add(1, Ordering::Relaxed);
        Ok(Candidate::new(format!(
            "{}-g{}v{}",
            candidate.id(),
            ctx.generation,
            variant
        )))
    }
}

impl Default for SuffixMutator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_target_length_scores_exact_match_highest() {
        let evaluator = TargetLengthEvaluator::new(4);
        let ctx = EvaluationContext::for_generation(0);

        let exact = evaluator.evaluate(&Candidate::new("abcd"), &ctx).await.unwrap();
        let off = evaluator.evaluate(&Candidate::new("abcdef"), &ctx).await.unwrap();

        assert_eq!(exact.total_score, 1.0);
        assert!(off.total_score < exact.total_score);
        assert_eq!(off.sub_scores["length_distance"], 2.0);
    }

    #[tokio::test]
    async fn test_suffix_mutator_stamps_generation() {
        let mutator = SuffixMutator::new();
        let ctx = EvaluationContext::for_generation(2);

        let first = mutator.mutate(&Candidate::new("seed"), &ctx).await.unwrap();
        let second = mutator.mutate(&Candidate::new("seed"), &ctx).await.unwrap();

        assert_eq!(first.id(), "seed-g2v0");
        assert_eq!(second.id(), "seed-g2v1");
    }
}
