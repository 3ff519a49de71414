//! EvoSuite CLI - evolutionary optimization harness.

use anyhow::Result;
use clap::{Parser, Subcommand};
use evosuite_core::{Candidate, Population};
use evosuite_engine::{EngineConfig, EvolutionEngine, RunOutcome};
use evosuite_plugins::{
    LoadStatus, PluginCatalog, PluginRegistry, SuffixMutator, TargetLengthEvaluator,
};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "evosuite")]
#[command(about = "Evolutionary optimization harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the optimization loop
    Run {
        /// Number of generations
        #[arg(long, default_value = "3")]
        generations: usize,
        /// Seed candidate identifier (repeatable)
        #[arg(
            long = "candidate",
            default_values = ["candidate_1", "candidate_2", "candidate_3"]
        )]
        candidates: Vec<String>,
        /// Directory to load configuration from
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// List discovered plugins
    Plugins {
        /// Directory to load configuration from
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            generations,
            candidates,
            root,
        } => {
            let registry = bootstrap(&root)?;

            let mut engine = EvolutionEngine::new().with_config(EngineConfig { generations });
            engine.bind(&registry);

            let seed = Population::seed(candidates.into_iter().map(Candidate::new).collect());

            match engine.run(seed).await? {
                RunOutcome::Complete { best, best_score } => {
                    for report in engine.history() {
                        println!(
                            "Generation {}: best '{}' (score: {:.2})",
                            report.index, report.best, report.best_score
                        );
                    }
                    println!(
                        "Optimization complete! Final best: '{}' (score: {:.2})",
                        best, best_score
                    );
                }
                RunOutcome::MissingEvaluator => {
                    println!("No evaluator plugin found; nothing to optimize.");
                }
                RunOutcome::MissingMutator => {
                    println!("No mutator plugin found; nothing to optimize.");
                }
            }
        }
        Commands::Plugins { root } => {
            let registry = bootstrap(&root)?;

            println!(
                "Plugins in '{}' ({})",
                registry.namespace(),
                registry.records().len()
            );
            for record in registry.records() {
                match &record.status {
                    LoadStatus::Loaded => {
                        let tags: Vec<&str> = record
                            .capability_tags()
                            .iter()
                            .map(|c| c.as_str())
                            .collect();
                        println!("  {} | loaded | [{}]", record.name, tags.join(", "));
                    }
                    LoadStatus::Failed(reason) => {
                        println!("  {} | failed | {}", record.name, reason);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Load configuration and discover the shipped plugins.
///
/// Failures here are startup dependency errors; `main` surfaces them as a
/// non-zero exit instead of terminating from library code.
fn bootstrap(root: &Path) -> Result<PluginRegistry> {
    let config = evosuite_config::load_config(root)?;
    info!("loaded config from: {:?}", config.provenance());

    let target_length = config
        .get("target_length")
        .and_then(|v| v.as_u64())
        .unwrap_or(16) as usize;

    let mut catalog = PluginCatalog::new("evosuite.plugins");
    catalog.register(
        "target-length",
        Box::new(move || Ok(TargetLengthEvaluator::new(target_length).capabilities())),
    );
    catalog.register(
        "suffix",
        Box::new(|| Ok(SuffixMutator::new().capabilities())),
    );

    Ok(PluginRegistry::discover(&catalog))
}
