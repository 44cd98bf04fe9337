use crate::catalog::IntersectionKey;
use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Wrong answers are not errors: a mismatch is a normal outcome that lands
/// the cell in `Incorrect` and is retryable without limit. Likewise,
/// editing an already-solved cell is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The catalog has no puzzles to select from. Fatal at startup.
    #[error("catalog contains no puzzles")]
    CatalogEmpty,

    /// A command referenced a cell outside the 2x2 grid. Integration bug;
    /// rejected at the command boundary.
    #[error("cell index {0} is out of range (grid has 4 cells)")]
    InvalidCellIndex(usize),

    /// A cell's (top, left) pair has no entry in the intersection table.
    /// Malformed puzzle data; fatal at session start, never per-submission.
    #[error("no intersection entry for {0}")]
    UnknownIntersection(IntersectionKey),

    /// A puzzle definition fails structural validation.
    #[error("malformed puzzle definition: {0}")]
    MalformedGrid(String),

    /// A per-cell command arrived before any session was started.
    #[error("no active session")]
    NoSession,
}
