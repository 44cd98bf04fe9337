//! Per-cell state machines and the session that orchestrates them.

use crate::answer;
use crate::catalog::{Actor, PuzzleDefinition};
use crate::error::EngineError;
use crate::suggest::{PoolPolicy, SuggestionEngine};
use crate::timer::Timer;
use serde::{Deserialize, Serialize};

/// Number of playable cells in the 2x2 grid.
pub const GRID_CELLS: usize = 4;

/// Typing this into a cell (any casing) reveals the solution grid instead
/// of submitting an answer.
pub const REVEAL_KEYWORD: &str = "showans";

/// Interaction state of one cell.
///
/// Transitions: Empty -> Editing, Editing -> Correct | Incorrect,
/// Incorrect -> Editing. Correct is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Editing,
    Correct,
    Incorrect,
}

/// A cell's state plus the text currently shown in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub state: CellState,
    pub text: String,
}

impl CellView {
    fn empty() -> Self {
        Self {
            state: CellState::Empty,
            text: String::new(),
        }
    }
}

/// Observable outputs of the engine, consumed by a presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    CellStateChanged {
        index: usize,
        state: CellState,
        text: String,
    },
    SuggestionsUpdated {
        index: usize,
        candidates: Vec<Actor>,
    },
    TimerTick {
        elapsed_secs: u64,
    },
    GameComplete {
        elapsed_secs: u64,
    },
    SolutionRevealed,
}

/// Fires completion exactly once per session.
///
/// Solved counts never decrease and Correct cells never revert, so a second
/// firing is impossible within one session; a fresh session gets a fresh
/// tracker.
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    fired: bool,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once, when the solved count first covers the grid.
    pub fn observe(&mut self, solved: usize) -> bool {
        if solved >= GRID_CELLS && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }
}

/// One playthrough of a single puzzle, from start to completion or
/// replacement. All mutation goes through the operations below; restarting
/// means building a new session value, never patching an old one.
#[derive(Debug, Clone)]
pub struct GridSession {
    puzzle: PuzzleDefinition,
    /// Valid answers per cell, resolved from the intersection table at
    /// session start. Never empty.
    valid_answers: [Vec<Actor>; GRID_CELLS],
    /// Full actor directory, for the global suggestion policy.
    global_pool: Vec<Actor>,
    cells: [CellView; GRID_CELLS],
    solved: usize,
    timer: Timer,
    tracker: CompletionTracker,
    suggestions: SuggestionEngine,
}

impl GridSession {
    /// Begin a fresh playthrough: all cells Empty, solved count zero, timer
    /// reset and running.
    pub fn start(
        puzzle: PuzzleDefinition,
        valid_answers: [Vec<Actor>; GRID_CELLS],
        global_pool: Vec<Actor>,
        policy: PoolPolicy,
    ) -> Self {
        let mut timer = Timer::new();
        timer.start();
        Self {
            puzzle,
            valid_answers,
            global_pool,
            cells: std::array::from_fn(|_| CellView::empty()),
            solved: 0,
            timer,
            tracker: CompletionTracker::new(),
            suggestions: SuggestionEngine::new(policy),
        }
    }

    pub fn puzzle(&self) -> &PuzzleDefinition {
        &self.puzzle
    }

    pub fn cells(&self) -> &[CellView; GRID_CELLS] {
        &self.cells
    }

    pub fn solved_count(&self) -> usize {
        self.solved
    }

    pub fn is_complete(&self) -> bool {
        self.solved == GRID_CELLS
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    /// Valid answers per cell, for rendering the reveal grid.
    pub fn solution(&self) -> &[Vec<Actor>; GRID_CELLS] {
        &self.valid_answers
    }

    fn check_index(index: usize) -> Result<(), EngineError> {
        if index < GRID_CELLS {
            Ok(())
        } else {
            Err(EngineError::InvalidCellIndex(index))
        }
    }

    /// Open a cell for input. Empty and Incorrect cells transition to
    /// Editing with cleared text; a Correct cell is a no-op, not an error.
    pub fn begin_edit(&mut self, index: usize) -> Result<Vec<SessionEvent>, EngineError> {
        Self::check_index(index)?;
        let cell = &mut self.cells[index];
        match cell.state {
            CellState::Empty | CellState::Incorrect => {
                cell.state = CellState::Editing;
                cell.text.clear();
                Ok(vec![SessionEvent::CellStateChanged {
                    index,
                    state: cell.state,
                    text: cell.text.clone(),
                }])
            }
            CellState::Correct | CellState::Editing => Ok(Vec::new()),
        }
    }

    /// Record the live query text and return the filtered suggestions for
    /// it. Only meaningful while the cell is Editing; cell state never
    /// changes here.
    pub fn update_query(&mut self, index: usize, text: &str) -> Result<Vec<SessionEvent>, EngineError> {
        Self::check_index(index)?;
        if self.cells[index].state != CellState::Editing {
            return Ok(Vec::new());
        }
        self.cells[index].text = text.to_string();
        let candidates = self.suggestions.filter(self.pool(index), text);
        Ok(vec![SessionEvent::SuggestionsUpdated { index, candidates }])
    }

    fn pool(&self, index: usize) -> &[Actor] {
        match self.suggestions.policy() {
            PoolPolicy::CellAnswers => &self.valid_answers[index],
            PoolPolicy::GlobalDirectory => &self.global_pool,
        }
    }

    /// Submit an answer for a cell.
    ///
    /// The reveal keyword is a side command: it emits `SolutionRevealed`
    /// and touches nothing else. Otherwise a match lands the cell in
    /// Correct and a mismatch in Incorrect, with the submitted text left
    /// visible either way. Submitting to an already-solved cell is a no-op.
    pub fn submit(&mut self, index: usize, raw: &str) -> Result<Vec<SessionEvent>, EngineError> {
        Self::check_index(index)?;
        let submitted = raw.trim();
        if submitted.eq_ignore_ascii_case(REVEAL_KEYWORD) {
            return Ok(vec![SessionEvent::SolutionRevealed]);
        }
        if self.cells[index].state == CellState::Correct {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();
        let cell = &mut self.cells[index];
        if answer::is_valid(&self.valid_answers[index], submitted) {
            cell.state = CellState::Correct;
            cell.text = submitted.to_string();
            self.solved += 1;
            events.push(SessionEvent::CellStateChanged {
                index,
                state: CellState::Correct,
                text: submitted.to_string(),
            });
            if self.tracker.observe(self.solved) {
                self.timer.stop();
                log::info!("grid solved in {}", self.timer.format());
                events.push(SessionEvent::GameComplete {
                    elapsed_secs: self.timer.elapsed_secs(),
                });
            }
        } else {
            cell.state = CellState::Incorrect;
            cell.text = submitted.to_string();
            events.push(SessionEvent::CellStateChanged {
                index,
                state: CellState::Incorrect,
                text: submitted.to_string(),
            });
        }
        Ok(events)
    }

    /// Choosing a suggestion submits it directly.
    pub fn select_suggestion(&mut self, index: usize, actor: &str) -> Result<Vec<SessionEvent>, EngineError> {
        self.submit(index, actor)
    }

    /// Abandon an edit. An untouched cell goes back to Empty; text typed
    /// but never submitted counts as a miss and lands in Incorrect.
    pub fn cancel_edit(&mut self, index: usize) -> Result<Vec<SessionEvent>, EngineError> {
        Self::check_index(index)?;
        let cell = &mut self.cells[index];
        if cell.state != CellState::Editing {
            return Ok(Vec::new());
        }
        cell.state = if cell.text.is_empty() {
            CellState::Empty
        } else {
            CellState::Incorrect
        };
        Ok(vec![SessionEvent::CellStateChanged {
            index,
            state: cell.state,
            text: cell.text.clone(),
        }])
    }
}
