//! The command/event contract exposed to presentation adapters.

use crate::catalog::{Actor, PuzzleCatalog};
use crate::error::EngineError;
use crate::selector::PuzzleSelector;
use crate::session::{CellState, GridSession, SessionEvent, GRID_CELLS};
use crate::suggest::PoolPolicy;
use log::debug;

/// Commands accepted from a presentation adapter. Transport-agnostic; a
/// terminal, web, or native front end all drive the same contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin the first session.
    StartSession,
    /// Discard the current session, pick a new puzzle, start fresh.
    NewGrid,
    BeginEdit { index: usize },
    UpdateQuery { index: usize, text: String },
    Submit { index: usize, text: String },
    SelectSuggestion { index: usize, actor: String },
    CancelEdit { index: usize },
}

/// Owns the catalog and the single active session.
///
/// Starting a new grid replaces the whole session value; a stale command
/// can never see half of an old session and half of a new one.
pub struct Engine {
    catalog: PuzzleCatalog,
    selector: PuzzleSelector,
    policy: PoolPolicy,
    session: Option<GridSession>,
}

impl Engine {
    /// Validate the catalog and build an engine around it. Malformed data
    /// fails here, before any player sees a grid.
    pub fn new(catalog: PuzzleCatalog) -> Result<Self, EngineError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            selector: PuzzleSelector::new(),
            policy: PoolPolicy::default(),
            session: None,
        })
    }

    /// Use seeded puzzle selection for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.selector = PuzzleSelector::with_seed(seed);
        self
    }

    /// Choose where autocomplete suggestions draw from.
    pub fn with_policy(mut self, policy: PoolPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    /// The active session, if one has been started.
    pub fn session(&self) -> Option<&GridSession> {
        self.session.as_ref()
    }

    /// Dispatch one command, returning the events it produced.
    pub fn apply(&mut self, command: Command) -> Result<Vec<SessionEvent>, EngineError> {
        match command {
            Command::StartSession | Command::NewGrid => self.start(),
            Command::BeginEdit { index } => self.session_mut()?.begin_edit(index),
            Command::UpdateQuery { index, text } => self.session_mut()?.update_query(index, &text),
            Command::Submit { index, text } => self.session_mut()?.submit(index, &text),
            Command::SelectSuggestion { index, actor } => {
                self.session_mut()?.select_suggestion(index, &actor)
            }
            Command::CancelEdit { index } => self.session_mut()?.cancel_edit(index),
        }
    }

    fn session_mut(&mut self) -> Result<&mut GridSession, EngineError> {
        self.session.as_mut().ok_or(EngineError::NoSession)
    }

    /// Discard any current session and start a fresh one on a randomly
    /// selected puzzle.
    pub fn start(&mut self) -> Result<Vec<SessionEvent>, EngineError> {
        let picked = self.selector.select(&self.catalog)?;
        let puzzle = self.catalog.grids[picked].clone();
        debug!(
            "selected grid {picked}: {} / {} x {} / {}",
            puzzle.top_shows[0], puzzle.top_shows[1], puzzle.left_shows[0], puzzle.left_shows[1]
        );

        let mut valid_answers: [Vec<Actor>; GRID_CELLS] = Default::default();
        for (i, cell) in puzzle.cells.iter().enumerate() {
            let key = cell.key();
            let answers = self
                .catalog
                .answers(&key)
                .ok_or(EngineError::UnknownIntersection(key))?;
            valid_answers[i] = answers.to_vec();
        }

        self.session = Some(GridSession::start(
            puzzle,
            valid_answers,
            self.catalog.actors.clone(),
            self.policy,
        ));

        let mut events: Vec<SessionEvent> = (0..GRID_CELLS)
            .map(|index| SessionEvent::CellStateChanged {
                index,
                state: CellState::Empty,
                text: String::new(),
            })
            .collect();
        events.push(SessionEvent::TimerTick { elapsed_secs: 0 });
        Ok(events)
    }

    /// Periodic clock output for the adapter's render loop. None once the
    /// timer has stopped or before any session exists.
    pub fn tick(&self) -> Option<SessionEvent> {
        let session = self.session.as_ref()?;
        session.timer().is_running().then(|| SessionEvent::TimerTick {
            elapsed_secs: session.elapsed_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GridCell, PuzzleDefinition};
    use std::collections::HashMap;

    fn cell(top: &str, left: &str) -> GridCell {
        GridCell {
            top: top.to_string(),
            left: left.to_string(),
        }
    }

    fn catalog() -> PuzzleCatalog {
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

    fn engine() -> Engine {
        Engine::new(catalog()).unwrap().with_seed(42)
    }

    #[test]
    fn construction_rejects_empty_catalog() {
        assert_eq!(
            Engine::new(PuzzleCatalog::default()).err(),
            Some(EngineError::CatalogEmpty)
        );
    }

    #[test]
    fn construction_rejects_missing_intersection() {
        let mut catalog = catalog();
        catalog.intersections.remove("A-D");
        assert!(matches!(
            Engine::new(catalog),
            Err(EngineError::UnknownIntersection(_))
        ));
    }

    #[test]
    fn commands_before_start_are_rejected() {
        let mut engine = engine();
        assert_eq!(
            engine.apply(Command::BeginEdit { index: 0 }),
            Err(EngineError::NoSession)
        );
        assert!(engine.tick().is_none());
    }

    #[test]
    fn start_emits_four_empty_cells_and_a_tick() {
        let mut engine = engine();
        let events = engine.apply(Command::StartSession).unwrap();
        assert_eq!(events.len(), 5);
        for (index, event) in events.iter().take(4).enumerate() {
            assert_eq!(
                *event,
                SessionEvent::CellStateChanged {
                    index,
                    state: CellState::Empty,
                    text: String::new(),
                }
            );
        }
        assert_eq!(events[4], SessionEvent::TimerTick { elapsed_secs: 0 });
        assert!(engine.session().is_some());
    }

    #[test]
    fn new_grid_discards_progress_wholesale() {
        let mut engine = engine();
        engine.apply(Command::StartSession).unwrap();
        engine
            .apply(Command::Submit { index: 0, text: "X".into() })
            .unwrap();
        assert_eq!(engine.session().unwrap().solved_count(), 1);

        engine.apply(Command::NewGrid).unwrap();
        let session = engine.session().unwrap();
        assert_eq!(session.solved_count(), 0);
        assert!(session.timer().is_running());
        assert!(session.cells().iter().all(|c| c.state == CellState::Empty));
    }

    #[test]
    fn full_playthrough_completes_once() {
        let mut engine = engine();
        engine.apply(Command::StartSession).unwrap();
        let order = [(2usize, "Y"), (0, "X"), (3, "W"), (1, "Z")];
        let mut completions = 0;
        for (index, text) in order {
            let events = engine
                .apply(Command::Submit { index, text: text.into() })
                .unwrap();
            completions += events
                .iter()
                .filter(|e| matches!(e, SessionEvent::GameComplete { .. }))
                .count();
        }
        assert_eq!(completions, 1);
        assert!(engine.session().unwrap().is_complete());
        // Timer stopped; no further ticks.
        assert!(engine.tick().is_none());
    }

    #[test]
    fn select_suggestion_routes_to_submit() {
        let mut engine = engine();
        engine.apply(Command::StartSession).unwrap();
        engine.apply(Command::BeginEdit { index: 1 }).unwrap();
        engine
            .apply(Command::SelectSuggestion { index: 1, actor: "Z".into() })
            .unwrap();
        assert_eq!(engine.session().unwrap().cells()[1].state, CellState::Correct);
    }

    #[test]
    fn reveal_keyword_flows_through_the_contract() {
        let mut engine = engine();
        engine.apply(Command::StartSession).unwrap();
        let events = engine
            .apply(Command::Submit { index: 2, text: "ShowAns".into() })
            .unwrap();
        assert_eq!(events, vec![SessionEvent::SolutionRevealed]);
        assert_eq!(engine.session().unwrap().cells()[2].state, CellState::Empty);
    }

    #[test]
    fn tick_reports_elapsed_while_running() {
        let mut engine = engine();
        engine.apply(Command::StartSession).unwrap();
        assert!(matches!(
            engine.tick(),
            Some(SessionEvent::TimerTick { elapsed_secs: 0 })
        ));
    }
}
