//! Candidate model - opaque unit of the search space.

use serde::{Deserialize, Serialize};

/// An opaque candidate solution.
///
/// The harness never looks inside a candidate: it stores candidates, hands
/// them to plugins, and compares them for equality. The payload is a
/// caller-chosen identifier; any richer structure lives on the plugin side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate(String);

impl Candidate {
    /// Create a candidate from an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The candidate's identifier.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Candidate {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Candidate {
    fn from(id: String) -> Self {
        Self(id)
    }
}
