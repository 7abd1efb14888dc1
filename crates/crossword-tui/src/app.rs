use crate::game::Game;
use crate::store::PuzzleStore;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use crossword_core::{Puzzle, Submission};
use std::time::Duration;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Puzzle list
    Browse,
    /// Solving a puzzle
    Playing,
    /// Score screen after a successful submit
    Result,
}

/// The main application state
pub struct App {
    /// Puzzle repository, injected at startup
    store: PuzzleStore,
    /// Loaded puzzle list
    pub puzzles: Vec<Puzzle>,
    /// Selected row in the browse list
    pub browse_selection: usize,
    /// Current screen
    pub screen_state: ScreenState,
    /// Active game, present on Playing/Result screens
    pub game: Option<Game>,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
}

impl App {
    pub fn new(store: PuzzleStore) -> Self {
        let puzzles = store.list();
        Self {
            store,
            puzzles,
            browse_selection: 0,
            screen_state: ScreenState::Browse,
            game: None,
            theme: Theme::dark(),
            message: None,
            message_timer: 0,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(100)
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

    /// Reload the puzzle list from the store.
    pub fn reload(&mut self) {
        self.puzzles = self.store.list();
        if self.browse_selection >= self.puzzles.len() {
            self.browse_selection = self.puzzles.len().saturating_sub(1);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Browse => self.handle_browse_key(key),
            ScreenState::Playing => self.handle_game_key(key),
            ScreenState::Result => self.handle_result_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            KeyCode::Up | KeyCode::Char('k') => {
                self.browse_selection = self.browse_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.puzzles.len().saturating_sub(1);
                self.browse_selection = (self.browse_selection + 1).min(max);
            }

            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(puzzle) = self.puzzles.get(self.browse_selection) {
                    self.game = Some(Game::new(puzzle.clone()));
                    self.screen_state = ScreenState::Playing;
                    self.show_message(&format!("Playing {}", puzzle.title));
                }
            }

            // Theme cycle
            KeyCode::Char('t') => {
                self.theme = match self.theme.bg {
                    crossterm::style::Color::Black => Theme::dark(),
                    crossterm::style::Color::Rgb { r: 20, .. } => Theme::light(),
                    _ => Theme::high_contrast(),
                };
            }

            _ => {}
        }
        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(game) = self.game.as_mut() else {
            self.screen_state = ScreenState::Browse;
            return AppAction::Continue;
        };

        match key.code {
            // Back to the list, discarding the attempt
            KeyCode::Esc => {
                self.game = None;
                self.screen_state = ScreenState::Browse;
            }

            // Typing
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                game.session_mut().input(Some(c));
            }
            KeyCode::Backspace | KeyCode::Delete => {
                game.session_mut().backspace();
            }
            KeyCode::Tab | KeyCode::Enter => {
                game.session_mut().move_to_next();
            }

            // Spatial navigation
            KeyCode::Left => self.move_selection(0, -1),
            KeyCode::Right => self.move_selection(0, 1),
            KeyCode::Up => self.move_selection(-1, 0),
            KeyCode::Down => self.move_selection(1, 0),

            // Toggle direction by reselecting the current cell
            KeyCode::Char(' ') => {
                if let Some((row, col)) = game.session().selected() {
                    game.session_mut().select_cell(row, col, None);
                }
            }

            // Clue cycling
            KeyCode::Char('[') => self.cycle_clue(-1),
            KeyCode::Char(']') => self.cycle_clue(1),

            // Check answers
            KeyCode::Char('1') => {
                game.session_mut().check();
                self.show_message("Checked: green = correct, red = wrong");
            }

            // Reveal all
            KeyCode::Char('2') => {
                game.reveal();
                self.show_message("Full solution revealed");
            }

            // Clear the grid
            KeyCode::Char('3') => {
                game.session_mut().clear();
                self.show_message("Grid cleared");
            }

            // Submit
            KeyCode::Char('4') => match game.submit() {
                Submission::Scored(_) => {
                    self.screen_state = ScreenState::Result;
                }
                Submission::Incomplete { filled, total } => {
                    self.show_message(&format!(
                        "Incomplete: {} of {} cells filled",
                        filled, total
                    ));
                }
            },

            _ => {}
        }
        AppAction::Continue
    }

    fn handle_result_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
                self.game = None;
                self.screen_state = ScreenState::Browse;
            }
            // Replay the same puzzle
            KeyCode::Char('r') => {
                if let Some(game) = self.game.as_mut() {
                    game.reset();
                    self.screen_state = ScreenState::Playing;
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Step the selection to the nearest letter cell in the given
    /// direction, keeping the current word orientation.
    fn move_selection(&mut self, row_delta: i32, col_delta: i32) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let session = game.session_mut();
        let grid = session.grid();
        let (rows, cols) = (grid.len() as i32, grid.first().map_or(0, Vec::len) as i32);

        let Some((row, col)) = session.selected() else {
            // Nothing selected yet: start at the first letter cell.
            if let Some(cell) = grid.iter().flatten().find(|c| !c.is_black()) {
                let (r, c) = (cell.row, cell.col);
                session.select_cell(r, c, None);
            }
            return;
        };

        let (mut r, mut c) = (row as i32 + row_delta, col as i32 + col_delta);
        while r >= 0 && r < rows && c >= 0 && c < cols {
            let cell = &session.grid()[r as usize][c as usize];
            if !cell.is_black() {
                session.select_cell(r as usize, c as usize, None);
                return;
            }
            r += row_delta;
            c += col_delta;
        }
    }

    /// Jump to the previous/next clue relative to the selected one.
    fn cycle_clue(&mut self, step: i32) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let clues: Vec<_> = game.puzzle().clues.iter().cloned().collect();
        if clues.is_empty() {
            return;
        }
        let current = game
            .selected_clue()
            .and_then(|sel| clues.iter().position(|c| c == sel))
            .unwrap_or(0);
        let len = clues.len() as i32;
        let next = (current as i32 + step).rem_euclid(len) as usize;
        game.session_mut().select_clue(&clues[next]);
    }
}
