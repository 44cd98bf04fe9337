//! Loads the pre-built catalog from disk.

use anyhow::{bail, Context};
use castgrid_core::PuzzleCatalog;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations tried in order when no path is given on the command line.
fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("catalog.json"),
        PathBuf::from("assets/catalog.json"),
    ];
    if let Some(dir) = dirs::data_local_dir() {
        paths.push(dir.join("castgrid").join("catalog.json"));
    }
    paths
}

/// Read and parse the catalog JSON. Validation happens later, at engine
/// construction.
pub fn load(path: Option<&Path>) -> anyhow::Result<PuzzleCatalog> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_paths().into_iter().find(|p| p.exists()) {
            Some(p) => p,
            None => bail!(
                "no catalog found; pass --catalog or place catalog.json in the working directory"
            ),
        },
    };

    let json = fs::read_to_string(&path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog: PuzzleCatalog = serde_json::from_str(&json)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn loads_a_catalog_file() {
        let path = env::temp_dir().join("castgrid_loader_test.json");
        fs::write(
            &path,
            r#"{
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
                "actors": ["X"],
                "intersections": {"A-C": ["X"], "B-C": ["X"], "A-D": ["X"], "B-D": ["X"]}
            }"#,
        )
        .unwrap();

        let catalog = load(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = env::temp_dir().join("castgrid_loader_missing.json");
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let path = env::temp_dir().join("castgrid_loader_bad.json");
        fs::write(&path, "not json").unwrap();
        assert!(load(Some(&path)).is_err());
        fs::remove_file(&path).ok();
    }
}
