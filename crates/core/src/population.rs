//! Population - one generation's ordered candidate set.

use crate::Candidate;
use serde::{Deserialize, Serialize};

/// An ordered collection of candidates representing one generation.
///
/// Order carries no semantic weight except as the stable tie-break key
/// during selection. The size is fixed for a run: the loop replaces a
/// population wholesale at the end of each generation, and there is no
/// partial-update API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Create a population from seed candidates.
    pub fn seed(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True if the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidates in order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterate candidates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_preserves_order() {
        let population = Population::seed(vec![
            Candidate::new("c1"),
            Candidate::new("c2"),
            Candidate::new("c3"),
        ]);

        assert_eq!(population.len(), 3);
        assert_eq!(population.candidates()[0], Candidate::new("c1"));
        assert_eq!(population.candidates()[2], Candidate::new("c3"));
    }

    #[test]
    fn test_empty_population() {
        let population = Population::seed(Vec::new());
        assert!(population.is_empty());
        assert_eq!(population.iter().count(), 0);
    }
}
