//! Plugin discovery with per-entry failure isolation.

use crate::{Capability, CapabilityHandle, PluginCatalog};
use tracing::{info, warn};

/// Load outcome for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The factory produced its capability handles
    Loaded,
    /// The factory returned an error
    Failed(String),
}

/// One discovered plugin.
pub struct PluginRecord {
    /// Name unique within the discovery namespace
    pub name: String,

    /// Declared capability handles (empty when loading failed)
    pub capabilities: Vec<CapabilityHandle>,

    /// Whether instantiation succeeded
    pub status: LoadStatus,
}

impl PluginRecord {
    /// Capability tags this record declares, in declaration order.
    pub fn capability_tags(&self) -> Vec<Capability> {
        self.capabilities.iter().map(|h| h.capability()).collect()
    }
}

/// Discovered plugins for one namespace.
///
/// Records live for the process duration; the registry never re-runs a
/// factory after discovery.
pub struct PluginRegistry {
    namespace: String,
    records: Vec<PluginRecord>,
}

impl PluginRegistry {
    /// Instantiate every catalog entry, isolating per-entry failures.
    ///
    /// A failing factory yields a `Failed` record and discovery continues
    /// with the remaining entries; discovery itself never errors. Records
    /// come back in catalog order.
    pub fn discover(catalog: &PluginCatalog) -> Self {
        let mut records = Vec::with_capacity(catalog.len());

        for (name, factory) in catalog.entries() {
            match factory() {
                Ok(capabilities) => {
                    info!("loaded plugin: {}", name);
                    records.push(PluginRecord {
                        name: name.clone(),
                        capabilities,
                        status: LoadStatus::Loaded,
                    });
                }
                Err(e) => {
                    warn!("failed to load plugin {}: {}", name, e);
                    records.push(PluginRecord {
                        name: name.clone(),
                        capabilities: Vec::new(),
                        status: LoadStatus::Failed(e.to_string()),
                    });
                }
            }
        }

        Self {
            namespace: catalog.namespace().to_string(),
            records,
        }
    }

    /// The namespace the records were discovered under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[PluginRecord] {
        &self.records
    }

    /// Records that loaded successfully, in catalog order.
    pub fn loaded(&self) -> impl Iterator<Item = &PluginRecord> {
        self.records
            .iter()
            .filter(|r| r.status == LoadStatus::Loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{SuffixMutator, TargetLengthEvaluator};

    fn mixed_catalog() -> PluginCatalog {
        let mut catalog = PluginCatalog::new("evosuite.plugins");
        catalog.register("scorer", Box::new(|| Ok(TargetLengthEvaluator::new(8).capabilities())));
        catalog.register("broken", Box::new(|| anyhow::bail!("missing model weights")));
        catalog.register("varier", Box::new(|| Ok(SuffixMutator::new().capabilities())));
        catalog
    }

    #[test]
    fn test_one_failure_never_aborts_discovery() {
        let registry = PluginRegistry::discover(&mixed_catalog());

        assert_eq!(registry.records().len(), 3);
        assert_eq!(registry.records()[0].status, LoadStatus::Loaded);
        assert_eq!(
            registry.records()[1].status,
            LoadStatus::Failed("missing model weights".to_string())
        );
        assert_eq!(registry.records()[2].status, LoadStatus::Loaded);
        assert_eq!(registry.loaded().count(), 2);
    }

    #[test]
    fn test_discovery_order_is_catalog_order() {
        let registry = PluginRegistry::discover(&mixed_catalog());
        let names: Vec<&str> = registry.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["scorer", "broken", "varier"]);
    }

    #[test]
    fn test_zero_capability_plugin_loads() {
        let mut catalog = PluginCatalog::new("evosuite.plugins");
        catalog.register("inert", Box::new(|| Ok(Vec::new())));

        let registry = PluginRegistry::discover(&catalog);
        assert_eq!(registry.records()[0].status, LoadStatus::Loaded);
        assert!(registry.records()[0].capability_tags().is_empty());
    }

    #[test]
    fn test_capability_tags() {
        let registry = PluginRegistry::discover(&mixed_catalog());
        assert_eq!(
            registry.records()[0].capability_tags(),
            vec![Capability::Evaluator]
        );
        assert!(registry.records()[1].capability_tags().is_empty());
        assert_eq!(
            registry.records()[2].capability_tags(),
            vec![Capability::Mutator]
        );
    }
}
