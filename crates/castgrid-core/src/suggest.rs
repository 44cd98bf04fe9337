//! Autocomplete filtering over a candidate pool.

use crate::answer::normalize;
use crate::catalog::Actor;

/// Which candidate pool a cell's suggestions draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolPolicy {
    /// Only the active cell's valid answers. Default; never surfaces names
    /// unrelated to the cell.
    #[default]
    CellAnswers,
    /// The catalog's full actor directory, for free recall.
    GlobalDirectory,
}

/// Substring filter over a candidate pool. Recomputed in full on every
/// query update; no caching.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionEngine {
    policy: PoolPolicy,
}

impl SuggestionEngine {
    pub fn new(policy: PoolPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PoolPolicy {
        self.policy
    }

    /// Every pool member whose normalized form contains the normalized
    /// query as a substring, in pool order. An empty query matches nothing
    /// rather than everything.
    pub fn filter(&self, pool: &[Actor], query: &str) -> Vec<Actor> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }
        pool.iter()
            .filter(|actor| normalize(actor).contains(&query))
            .cloned()
            .collect()
    }
}
