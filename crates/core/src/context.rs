//! Per-call context handed to plugin invocations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Auxiliary signals supplied to a single evaluate/mutate call.
///
/// Built fresh for every call and never reused; plugins must treat it as
/// read-only. It always carries the current generation index, plus any
/// extra signals the caller attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Generation index this call belongs to (0-based)
    pub generation: usize,

    /// Extra signals, uninterpreted by the harness
    pub signals: HashMap<String, serde_json::Value>,
}

impl EvaluationContext {
    /// Create a context for a generation with no extra signals.
    pub fn for_generation(generation: usize) -> Self {
        Self {
            generation,
            signals: HashMap::new(),
        }
    }

    /// Attach an extra signal.
    pub fn with_signal(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.signals.insert(name.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_attach_without_touching_generation() {
        let ctx = EvaluationContext::for_generation(2)
            .with_signal("budget", serde_json::json!(10))
            .with_signal("phase", serde_json::json!("warmup"));

        assert_eq!(ctx.generation, 2);
        assert_eq!(ctx.signals["budget"], serde_json::json!(10));
        assert_eq!(ctx.signals["phase"], serde_json::json!("warmup"));
    }
}
