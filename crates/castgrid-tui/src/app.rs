use crate::theme::Theme;
use castgrid_core::{Command, Engine, SessionEvent};
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Instructions overlay shown before the first grid
    Instructions,
    /// Normal gameplay
    Playing,
    /// All four cells solved
    Victory,
}

/// The main application state
pub struct App {
    /// The puzzle engine
    pub engine: Engine,
    /// Color theme
    pub theme: Theme,
    /// Current screen state
    pub screen: ScreenState,
    /// Selected cell, row-major 0..4
    pub cursor: usize,
    /// Cell currently in edit mode, if any
    pub editing: Option<usize>,
    /// Live input buffer while editing
    pub input: String,
    /// Current autocomplete candidates
    pub suggestions: Vec<String>,
    /// Highlighted suggestion, if navigating the list
    pub suggestion_sel: Option<usize>,
    /// Whether the solution grid is shown
    pub show_solution: bool,
    /// Final time of the last completed grid, in seconds
    pub final_time: Option<u64>,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
}

impl App {
    pub fn new(engine: Engine, theme: Theme) -> Self {
        Self {
            engine,
            theme,
            screen: ScreenState::Instructions,
            cursor: 0,
            editing: None,
            input: String::new(),
            suggestions: Vec::new(),
            suggestion_sel: None,
            show_solution: false,
            final_time: None,
            message: None,
            message_timer: 0,
        }
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen {
            ScreenState::Instructions => self.handle_instructions_key(key),
            ScreenState::Victory => self.handle_victory_key(key),
            ScreenState::Playing => self.handle_game_key(key),
        }
    }

    fn handle_instructions_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => self.start_grid(),
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_victory_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => self.start_grid(),
            KeyCode::Esc => {
                // Go back to the (finished) grid view
                self.screen = ScreenState::Playing;
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Discard the current grid and start a fresh one
    fn start_grid(&mut self) {
        self.show_solution = false;
        self.final_time = None;
        self.cursor = 0;
        self.exit_edit();
        match self.engine.apply(Command::NewGrid) {
            Ok(events) => {
                self.screen = ScreenState::Playing;
                self.process_events(events);
            }
            Err(e) => self.show_message(&format!("Failed to start: {}", e)),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        if self.editing.is_some() {
            return self.handle_edit_key(key);
        }

        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            // Navigation within the 2x2 grid
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor >= 2 {
                    self.cursor -= 2;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor < 2 {
                    self.cursor += 2;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.cursor % 2 == 1 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor % 2 == 0 {
                    self.cursor += 1;
                }
            }

            // New grid
            KeyCode::Char('n') => self.start_grid(),

            // Open the selected cell for input
            KeyCode::Enter | KeyCode::Char(' ') => self.begin_edit(),

            _ => {}
        }
        AppAction::Continue
    }

    fn begin_edit(&mut self) {
        let index = self.cursor;
        match self.engine.apply(Command::BeginEdit { index }) {
            Ok(events) => {
                if events.is_empty() {
                    // Solved cells stay solved
                    self.show_message("Already solved");
                } else {
                    self.editing = Some(index);
                    self.input.clear();
                    self.suggestions.clear();
                    self.suggestion_sel = None;
                    self.process_events(events);
                }
            }
            Err(e) => self.show_message(&e.to_string()),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(index) = self.editing else {
            return AppAction::Continue;
        };

        match key.code {
            KeyCode::Esc => {
                match self.engine.apply(Command::CancelEdit { index }) {
                    Ok(events) => self.process_events(events),
                    Err(e) => self.show_message(&e.to_string()),
                }
                self.exit_edit();
            }

            KeyCode::Enter => {
                let command = match self
                    .suggestion_sel
                    .and_then(|i| self.suggestions.get(i))
                    .cloned()
                {
                    Some(actor) => Command::SelectSuggestion { index, actor },
                    None => Command::Submit {
                        index,
                        text: self.input.clone(),
                    },
                };
                match self.engine.apply(command) {
                    Ok(events) => {
                        let revealed = events
                            .iter()
                            .any(|e| matches!(e, SessionEvent::SolutionRevealed));
                        self.process_events(events);
                        // The reveal keyword leaves the cell in edit mode
                        if !revealed {
                            self.exit_edit();
                        }
                    }
                    Err(e) => {
                        self.show_message(&e.to_string());
                        self.exit_edit();
                    }
                }
            }

            KeyCode::Backspace => {
                self.input.pop();
                self.update_query(index);
            }

            // Navigate the suggestion list
            KeyCode::Down | KeyCode::Tab => {
                if !self.suggestions.is_empty() {
                    self.suggestion_sel = Some(match self.suggestion_sel {
                        Some(i) if i + 1 < self.suggestions.len() => i + 1,
                        Some(_) | None => 0,
                    });
                }
            }
            KeyCode::Up => {
                if !self.suggestions.is_empty() {
                    self.suggestion_sel = Some(match self.suggestion_sel {
                        Some(0) | None => self.suggestions.len() - 1,
                        Some(i) => i - 1,
                    });
                }
            }

            KeyCode::Char(c) => {
                self.input.push(c);
                self.update_query(index);
            }

            _ => {}
        }
        AppAction::Continue
    }

    fn update_query(&mut self, index: usize) {
        self.suggestion_sel = None;
        match self.engine.apply(Command::UpdateQuery {
            index,
            text: self.input.clone(),
        }) {
            Ok(events) => self.process_events(events),
            Err(e) => self.show_message(&e.to_string()),
        }
    }

    fn exit_edit(&mut self) {
        self.editing = None;
        self.input.clear();
        self.suggestions.clear();
        self.suggestion_sel = None;
    }

    fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::SuggestionsUpdated { candidates, .. } => {
                    self.suggestions = candidates;
                }
                SessionEvent::GameComplete { elapsed_secs } => {
                    self.final_time = Some(elapsed_secs);
                    self.screen = ScreenState::Victory;
                }
                SessionEvent::SolutionRevealed => {
                    self.show_solution = true;
                }
                // Rendering reads cell and timer state from the session
                SessionEvent::CellStateChanged { .. } | SessionEvent::TimerTick { .. } => {}
            }
        }
    }
}
