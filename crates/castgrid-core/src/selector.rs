//! Uniform random puzzle selection.

use crate::catalog::PuzzleCatalog;
use crate::error::EngineError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws puzzle definitions uniformly at random, independent of history;
/// repeats across calls are allowed.
#[derive(Debug)]
pub struct PuzzleSelector {
    rng: StdRng,
}

impl Default for PuzzleSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded selection for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Index of a uniformly drawn definition.
    pub fn select(&mut self, catalog: &PuzzleCatalog) -> Result<usize, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::CatalogEmpty);
        }
        Ok(self.rng.gen_range(0..catalog.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GridCell, PuzzleDefinition};

    fn catalog_with(n: usize) -> PuzzleCatalog {
        let grid = PuzzleDefinition {
            top_shows: ["A".to_string(), "B".to_string()],
            left_shows: ["C".to_string(), "D".to_string()],
            cells: [
                GridCell { top: "A".into(), left: "C".into() },
                GridCell { top: "B".into(), left: "C".into() },
                GridCell { top: "A".into(), left: "D".into() },
                GridCell { top: "B".into(), left: "D".into() },
            ],
        };
        PuzzleCatalog {
            grids: vec![grid; n],
            ..Default::default()
        }
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let mut selector = PuzzleSelector::with_seed(1);
        assert_eq!(
            selector.select(&PuzzleCatalog::default()),
            Err(EngineError::CatalogEmpty)
        );
    }

    #[test]
    fn selection_stays_in_range() {
        let catalog = catalog_with(5);
        let mut selector = PuzzleSelector::with_seed(42);
        for _ in 0..100 {
            assert!(selector.select(&catalog).unwrap() < 5);
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let catalog = catalog_with(17);
        let mut a = PuzzleSelector::with_seed(7);
        let mut b = PuzzleSelector::with_seed(7);
        for _ in 0..20 {
            assert_eq!(a.select(&catalog).unwrap(), b.select(&catalog).unwrap());
        }
    }

    #[test]
    fn selection_eventually_covers_the_catalog() {
        let catalog = catalog_with(3);
        let mut selector = PuzzleSelector::with_seed(9);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[selector.select(&catalog).unwrap()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
