//! Explicit plugin catalog.

use crate::CapabilityHandle;

/// Constructs a plugin's capability handles.
///
/// A factory may declare zero, one, or both capabilities. Returning an
/// error marks the entry as failed during discovery without affecting the
/// other entries.
pub type PluginFactory =
    Box<dyn Fn() -> Result<Vec<CapabilityHandle>, anyhow::Error> + Send + Sync>;

/// An ordered, namespace-keyed plugin registration list.
///
/// Replaces runtime environment scanning: the hosting process registers
/// every plugin it ships once, at startup. Entries are iterated in
/// registration order, so discovery is deterministic for a fixed catalog.
pub struct PluginCatalog {
    namespace: String,
    entries: Vec<(String, PluginFactory)>,
}

impl PluginCatalog {
    /// Create an empty catalog for a namespace (e.g. `"evosuite.plugins"`).
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: Vec::new(),
        }
    }

    /// Register a plugin under a name unique within the namespace.
    pub fn register(&mut self, name: impl Into<String>, factory: PluginFactory) {
        self.entries.push((name.into(), factory));
    }

    /// The catalog's namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registered entries, in registration order.
    pub fn entries(&self) -> &[(String, PluginFactory)] {
        &self.entries
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
