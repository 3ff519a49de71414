//! The evolution engine - runs the optimization loop.

use anyhow::Context;
use evosuite_core::{Candidate, EvaluationContext, GenerationReport, Population};
use evosuite_plugins::{CapabilityHandle, Evaluator, Mutator, PluginRegistry};
use std::sync::Arc;
use tracing::{debug, info};

/// Configuration for the evolution engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of generations to run
    pub generations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { generations: 3 }
    }
}

/// The optimization loop.
///
/// Runs a bounded number of generations:
/// ```text
/// Evaluate → Select elite → Reproduce from elite
/// ```
///
/// Everything is awaited one call at a time, in population order; nothing
/// in a run executes concurrently. A hang inside a plugin call hangs the
/// run - there is no timeout or cancellation at this layer.
pub struct EvolutionEngine {
    evaluator: Option<(String, Arc<dyn Evaluator>)>,
    mutator: Option<(String, Arc<dyn Mutator>)>,
    config: EngineConfig,
    history: Vec<GenerationReport>,
}

impl EvolutionEngine {
    /// Create an engine with no capabilities bound.
    pub fn new() -> Self {
        Self {
            evaluator: None,
            mutator: None,
            config: EngineConfig::default(),
            history: Vec::new(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Bind capabilities from discovered plugins.
    ///
    /// Walks loaded records in catalog order and keeps replacing the bound
    /// handle, so when several plugins declare the same capability the one
    /// registered last wins. Last-registered-wins is the documented
    /// policy, not an accident of iteration.
    pub fn bind(&mut self, registry: &PluginRegistry) {
        for record in registry.loaded() {
            for handle in &record.capabilities {
                match handle {
                    CapabilityHandle::Evaluator(evaluator) => {
                        info!("using evaluator: {}", record.name);
                        self.evaluator = Some((record.name.clone(), Arc::clone(evaluator)));
                    }
                    CapabilityHandle::Mutator(mutator) => {
                        info!("using mutator: {}", record.name);
                        self.mutator = Some((record.name.clone(), Arc::clone(mutator)));
                    }
                }
            }
        }
    }

    /// Run the loop over a seed population.
    ///
    /// The population size stays fixed for the whole run: every generation
    /// keeps the elite unchanged in slot 0 and fills the remaining slots
    /// with fresh mutations of that elite. A missing capability is a
    /// recoverable stop, not an error; a failing plugin call aborts the
    /// run and propagates.
    pub async fn run(&mut self, seed: Population) -> Result<RunOutcome, anyhow::Error> {
        let Some((evaluator_name, evaluator)) = self.evaluator.clone() else {
            info!("no evaluator bound, nothing to optimize");
            return Ok(RunOutcome::MissingEvaluator);
        };
        let Some((mutator_name, mutator)) = self.mutator.clone() else {
            info!("no mutator bound, nothing to optimize");
            return Ok(RunOutcome::MissingMutator);
        };

        if seed.is_empty() {
            anyhow::bail!("seed population is empty");
        }
        if self.config.generations == 0 {
            anyhow::bail!("generations must be at least 1");
        }

        let mut population = seed;
        let mut best: Option<(Candidate, f64)> = None;

        for generation in 0..self.config.generations {
            let ctx = EvaluationContext::for_generation(generation);

            // Evaluate, one candidate at a time, in population order.
            let mut scored = Vec::with_capacity(population.len());
            for candidate in population.iter() {
                let result = evaluator.evaluate(candidate, &ctx).await.with_context(|| {
                    format!(
                        "evaluator '{}' failed on '{}' in generation {}",
                        evaluator_name, candidate, generation
                    )
                })?;
                debug!("evaluated '{}': score = {:.2}", candidate, result.total_score);
                scored.push((candidate.clone(), result.total_score));
            }

            // Stable sort: equal scores keep their population order, which
            // makes selection deterministic under ties. total_cmp gives
            // NaN a fixed rank below every real score.
            let mut ranked = scored.clone();
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            let (elite, elite_score) = ranked[0].clone();

            info!(
                "generation {}: best '{}' (score: {:.2})",
                generation, elite, elite_score
            );

            // Elite survives unchanged; every other slot mutates the elite.
            let mut next = Vec::with_capacity(population.len());
            next.push(elite.clone());
            for _ in 1..population.len() {
                let mutated = mutator.mutate(&elite, &ctx).await.with_context(|| {
                    format!(
                        "mutator '{}' failed in generation {}",
                        mutator_name, generation
                    )
                })?;
                next.push(mutated);
            }

            self.history.push(GenerationReport {
                index: generation,
                evaluations: scored,
                best: elite.clone(),
                best_score: elite_score,
                completed_at: chrono::Utc::now(),
            });

            population = Population::seed(next);
            best = Some((elite, elite_score));
        }

        // generations >= 1 is enforced above, so a best always exists here
        let (best, best_score) = best.expect("at least one generation ran");
        Ok(RunOutcome::Complete { best, best_score })
    }

    /// Reports for every completed generation, oldest first.
    pub fn history(&self) -> &[GenerationReport] {
        &self.history
    }
}

impl Default for EvolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// All generations ran; the final elite and its score
    Complete {
        /// The last generation's elite candidate
        best: Candidate,
        /// The elite's total score
        best_score: f64,
    },
    /// No evaluator capability was bound; nothing was evaluated
    MissingEvaluator,
    /// No mutator capability was bound; nothing ran
    MissingMutator,
}
