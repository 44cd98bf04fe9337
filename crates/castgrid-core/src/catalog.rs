use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A named entity serving as a row or column header.
pub type Show = String;

/// A named entity serving as a candidate answer.
pub type Actor = String;

/// The ordered (top, left) pair identifying one cell's answer domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntersectionKey {
    pub top: Show,
    pub left: Show,
}

impl IntersectionKey {
    pub fn new(top: impl Into<Show>, left: impl Into<Show>) -> Self {
        Self {
            top: top.into(),
            left: left.into(),
        }
    }
}

impl fmt::Display for IntersectionKey {
    /// Renders as `"{top}-{left}"`, the key format of the pre-built
    /// intersection table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.top, self.left)
    }
}

/// One playable intersection. Its valid answers live in the catalog's
/// intersection table and are resolved at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub top: Show,
    pub left: Show,
}

impl GridCell {
    pub fn key(&self) -> IntersectionKey {
        IntersectionKey::new(self.top.clone(), self.left.clone())
    }
}

/// One complete puzzle: two top shows, two left shows, and four cells
/// covering their cross product in row-major order (left index * 2 + top
/// index). Definitions are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub top_shows: [Show; 2],
    pub left_shows: [Show; 2],
    pub cells: [GridCell; 4],
}

impl PuzzleDefinition {
    /// Row-major cell index for (left row, top column).
    pub fn cell_index(row: usize, col: usize) -> usize {
        row * 2 + col
    }

    /// Structural validation against the catalog's intersection table:
    /// distinct shows, full cross-product coverage, and a non-empty answer
    /// set behind every cell.
    pub fn validate(&self, catalog: &PuzzleCatalog) -> Result<(), EngineError> {
        if self.top_shows[0] == self.top_shows[1] {
            return Err(EngineError::MalformedGrid(format!(
                "duplicate top show {:?}",
                self.top_shows[0]
            )));
        }
        if self.left_shows[0] == self.left_shows[1] {
            return Err(EngineError::MalformedGrid(format!(
                "duplicate left show {:?}",
                self.left_shows[0]
            )));
        }

        for (row, left) in self.left_shows.iter().enumerate() {
            for (col, top) in self.top_shows.iter().enumerate() {
                let cell = &self.cells[Self::cell_index(row, col)];
                if cell.top != *top || cell.left != *left {
                    return Err(EngineError::MalformedGrid(format!(
                        "cell {} should cover {}-{} but covers {}",
                        Self::cell_index(row, col),
                        top,
                        left,
                        cell.key()
                    )));
                }
                match catalog.answers(&cell.key()) {
                    None => return Err(EngineError::UnknownIntersection(cell.key())),
                    Some(answers) if answers.is_empty() => {
                        return Err(EngineError::MalformedGrid(format!(
                            "empty answer set for {}",
                            cell.key()
                        )));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

/// Pre-built puzzle data consumed by the engine. The JSON shape mirrors the
/// generated data files: an ordered list of grids, a flat actor directory,
/// and the valid answers per intersection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PuzzleCatalog {
    /// Ordered puzzle definitions. Order only matters for reproducible
    /// seeded selection.
    pub grids: Vec<PuzzleDefinition>,
    /// Every known actor, used as the global suggestion pool.
    #[serde(default)]
    pub actors: Vec<Actor>,
    /// Valid answers per intersection, keyed by the `IntersectionKey`
    /// display form.
    #[serde(default)]
    pub intersections: HashMap<String, Vec<Actor>>,
}

impl PuzzleCatalog {
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Valid answers for one intersection, if the table knows it.
    pub fn answers(&self, key: &IntersectionKey) -> Option<&[Actor]> {
        self.intersections.get(&key.to_string()).map(Vec::as_slice)
    }

    /// Validate every definition. Run once at engine construction so that
    /// malformed data fails loudly instead of mid-game.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.grids.is_empty() {
            return Err(EngineError::CatalogEmpty);
        }
        for grid in &self.grids {
            grid.validate(self)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(top: &str, left: &str) -> GridCell {
        GridCell {
            top: top.to_string(),
            left: left.to_string(),
        }
    }

    fn sample_catalog() -> PuzzleCatalog {
        let mut intersections = HashMap::new();
        intersections.insert("A-C".to_string(), vec!["X".to_string()]);
        intersections.insert("B-C".to_string(), vec!["Z".to_string()]);
        intersections.insert("A-D".to_string(), vec!["Y".to_string()]);
        intersections.insert("B-D".to_string(), vec!["W".to_string()]);

        PuzzleCatalog {
            grids: vec![PuzzleDefinition {
                top_shows: ["A".to_string(), "B".to_string()],
                left_shows: ["C".to_string(), "D".to_string()],
                cells: [cell("A", "C"), cell("B", "C"), cell("A", "D"), cell("B", "D")],
            }],
            actors: vec!["X".into(), "Y".into(), "Z".into(), "W".into()],
            intersections,
        }
    }

    #[test]
    fn valid_catalog_passes() {
        assert!(sample_catalog().validate().is_ok());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let catalog = PuzzleCatalog::default();
        assert_eq!(catalog.validate(), Err(EngineError::CatalogEmpty));
    }

    #[test]
    fn missing_intersection_is_rejected() {
        let mut catalog = sample_catalog();
        catalog.intersections.remove("B-D");
        assert_eq!(
            catalog.validate(),
            Err(EngineError::UnknownIntersection(IntersectionKey::new("B", "D")))
        );
    }

    #[test]
    fn empty_answer_set_is_rejected() {
        let mut catalog = sample_catalog();
        catalog.intersections.insert("A-C".to_string(), Vec::new());
        assert!(matches!(
            catalog.validate(),
            Err(EngineError::MalformedGrid(_))
        ));
    }

    #[test]
    fn swapped_cells_are_rejected() {
        let mut catalog = sample_catalog();
        catalog.grids[0].cells.swap(0, 1);
        assert!(matches!(
            catalog.validate(),
            Err(EngineError::MalformedGrid(_))
        ));
    }

    #[test]
    fn duplicate_shows_are_rejected() {
        let mut catalog = sample_catalog();
        catalog.grids[0].top_shows[1] = "A".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(EngineError::MalformedGrid(_))
        ));
    }

    #[test]
    fn catalog_parses_from_json() {
        let json = r#"{
            "grids": [{
                "top_shows": ["A", "B"],
                "left_shows": ["C", "D"],
                "cells": [
                    {"top": "A", "left": "C"},
                    {"top": "B", "left": "C"},
                    {"top": "A", "left": "D"},
                    {"top": "B", "left": "D"}
                ]
            }],
            "actors": ["X", "Y", "Z", "W"],
            "intersections": {
                "A-C": ["X"], "B-C": ["Z"], "A-D": ["Y"], "B-D": ["W"]
            }
        }"#;
        let catalog: PuzzleCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.answers(&IntersectionKey::new("A", "D")),
            Some(["Y".to_string()].as_slice())
        );
    }

    #[test]
    fn key_display_matches_table_format() {
        let key = IntersectionKey::new("The Wire", "Oz");
        assert_eq!(key.to_string(), "The Wire-Oz");
    }
}
