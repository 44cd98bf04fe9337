//! Core engine for a 2x2 trivia grid puzzle.
//!
//! A puzzle pairs two "top" shows with two "left" shows; the player fills
//! each of the four intersections with an actor that belongs to both shows.
//! The catalog of puzzles and valid answers is supplied pre-built; this
//! crate owns everything with real state: selecting a puzzle, driving the
//! per-cell state machines, validating submissions, filtering autocomplete
//! suggestions, and timing a playthrough.
//!
//! Presentation is somebody else's job. The [`Engine`] exposes a
//! command/event contract ([`Command`] in, [`SessionEvent`] out) that any
//! adapter can drive; see the `castgrid-tui` crate for a terminal front end
//! and `demos/basic.rs` for a headless walkthrough.

pub mod answer;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod selector;
pub mod session;
pub mod suggest;
pub mod timer;

pub use catalog::{Actor, GridCell, IntersectionKey, PuzzleCatalog, PuzzleDefinition, Show};
pub use engine::{Command, Engine};
pub use error::EngineError;
pub use selector::PuzzleSelector;
pub use session::{
    CellState, CellView, CompletionTracker, GridSession, SessionEvent, GRID_CELLS, REVEAL_KEYWORD,
};
pub use suggest::{PoolPolicy, SuggestionEngine};
pub use timer::{format_time, Timer};
