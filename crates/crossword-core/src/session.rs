//! Play session: live navigation and scoring state for one puzzle attempt.
//!
//! A session owns an independent deep copy of the puzzle grid and mutates
//! only the transient per-cell fields (`user_input`, `is_highlighted`,
//! `is_revealed`, `is_correct`). The canonical puzzle stays read-only, so
//! sessions never interfere with each other.

use crate::puzzle::{Cell, Clue, Direction, Puzzle};

/// Completion statistics from a scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// Outcome of [`Session::submit`].
///
/// Submission requires a fully filled grid (the require-complete policy):
/// a partially filled session reports `Incomplete` instead of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Scored(Score),
    Incomplete { filled: usize, total: usize },
}

/// One in-progress attempt at a puzzle.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Vec<Vec<Cell>>,
    selected: Option<(usize, usize)>,
    direction: Direction,
    completed: bool,
    checked: Vec<Vec<bool>>,
}

impl Session {
    /// Start a fresh attempt with an independent copy of the puzzle grid.
    pub fn new(puzzle: &Puzzle) -> Self {
        let rows = puzzle.rows();
        let cols = puzzle.cols();
        Self {
            grid: puzzle.grid.clone(),
            selected: None,
            direction: Direction::Across,
            completed: false,
            checked: vec![vec![false; cols]; rows],
        }
    }

    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|r| r.get(col))
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn was_checked(&self, row: usize, col: usize) -> bool {
        self.checked
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    fn rows(&self) -> usize {
        self.grid.len()
    }

    fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    fn is_black(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_none_or(Cell::is_black)
    }

    /// Select a cell. Black cells are ignored (an expected miss-click).
    /// Reselecting the current cell toggles the direction; otherwise the
    /// passed direction is adopted, or the current one retained.
    pub fn select_cell(&mut self, row: usize, col: usize, direction: Option<Direction>) {
        if self.is_black(row, col) {
            return;
        }
        self.direction = if self.selected == Some((row, col)) {
            self.direction.toggled()
        } else {
            direction.unwrap_or(self.direction)
        };
        self.selected = Some((row, col));
        self.highlight_word(row, col);
    }

    /// Jump to a clue's start with its direction forced.
    pub fn select_clue(&mut self, clue: &Clue) {
        if self.is_black(clue.row, clue.col) {
            return;
        }
        self.direction = clue.direction;
        self.selected = Some((clue.row, clue.col));
        self.highlight_word(clue.row, clue.col);
    }

    /// The first cell of the word containing `(row, col)` in `direction`:
    /// walk backward while the previous cell exists and is non-black.
    pub fn word_start(&self, row: usize, col: usize, direction: Direction) -> (usize, usize) {
        let (mut row, mut col) = (row, col);
        match direction {
            Direction::Across => {
                while col > 0 && !self.is_black(row, col - 1) {
                    col -= 1;
                }
            }
            Direction::Down => {
                while row > 0 && !self.is_black(row - 1, col) {
                    row -= 1;
                }
            }
        }
        (row, col)
    }

    /// Clear all highlights, then highlight the word span containing the
    /// cell in the current direction.
    fn highlight_word(&mut self, row: usize, col: usize) {
        for cell in self.grid.iter_mut().flatten() {
            cell.is_highlighted = false;
        }
        let (start_row, start_col) = self.word_start(row, col, self.direction);
        match self.direction {
            Direction::Across => {
                let mut c = start_col;
                while !self.is_black(row, c) {
                    self.grid[row][c].is_highlighted = true;
                    c += 1;
                }
            }
            Direction::Down => {
                let mut r = start_row;
                while !self.is_black(r, col) {
                    self.grid[r][col].is_highlighted = true;
                    r += 1;
                }
            }
        }
    }

    /// Type into the selected cell. `Some(letter)` is uppercased, written,
    /// and advances the selection; `None` clears without advancing.
    pub fn input(&mut self, letter: Option<char>) {
        let Some((row, col)) = self.selected else {
            return;
        };
        self.grid[row][col].user_input = letter.map(|c| c.to_ascii_uppercase());
        if letter.is_some() {
            self.move_to_next();
        }
    }

    /// If the selected cell has input, clear it in place; otherwise move to
    /// the previous cell (without clearing it).
    pub fn backspace(&mut self) {
        let Some((row, col)) = self.selected else {
            return;
        };
        if self.grid[row][col].has_input() {
            self.grid[row][col].user_input = None;
        } else {
            self.move_to_previous();
        }
    }

    /// Advance along the current direction, skipping blocks and wrapping
    /// raster-style: row-major for across, column-major for down. Selection
    /// stays put when no cell remains.
    pub fn move_to_next(&mut self) {
        let Some((row, col)) = self.selected else {
            return;
        };
        let (rows, cols) = (self.rows(), self.cols());
        let next = match self.direction {
            Direction::Across => {
                let mut c = col + 1;
                while c < cols && self.is_black(row, c) {
                    c += 1;
                }
                if c < cols {
                    Some((row, c))
                } else {
                    self.scan_row_major(row + 1, rows, cols)
                }
            }
            Direction::Down => {
                let mut r = row + 1;
                while r < rows && self.is_black(r, col) {
                    r += 1;
                }
                if r < rows {
                    Some((r, col))
                } else {
                    self.scan_col_major(col + 1, rows, cols)
                }
            }
        };
        if let Some((r, c)) = next {
            self.selected = Some((r, c));
        }
    }

    /// Step back along the current direction, mirroring [`Self::move_to_next`].
    pub fn move_to_previous(&mut self) {
        let Some((row, col)) = self.selected else {
            return;
        };
        let prev = match self.direction {
            Direction::Across => {
                let mut c = col as isize - 1;
                while c >= 0 && self.is_black(row, c as usize) {
                    c -= 1;
                }
                if c >= 0 {
                    Some((row, c as usize))
                } else {
                    self.scan_row_major_rev(row)
                }
            }
            Direction::Down => {
                let mut r = row as isize - 1;
                while r >= 0 && self.is_black(r as usize, col) {
                    r -= 1;
                }
                if r >= 0 {
                    Some((r as usize, col))
                } else {
                    self.scan_col_major_rev(col)
                }
            }
        };
        if let Some((r, c)) = prev {
            self.selected = Some((r, c));
        }
    }

    /// First non-black cell at or after `start_row`, left to right.
    fn scan_row_major(&self, start_row: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        (start_row..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .find(|&(r, c)| !self.is_black(r, c))
    }

    /// Last non-black cell before `row`, right to left.
    fn scan_row_major_rev(&self, row: usize) -> Option<(usize, usize)> {
        let cols = self.cols();
        (0..row)
            .rev()
            .flat_map(|r| (0..cols).rev().map(move |c| (r, c)))
            .find(|&(r, c)| !self.is_black(r, c))
    }

    /// First non-black cell at or after `start_col`, top to bottom.
    fn scan_col_major(&self, start_col: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        (start_col..cols)
            .flat_map(|c| (0..rows).map(move |r| (r, c)))
            .find(|&(r, c)| !self.is_black(r, c))
    }

    /// Last non-black cell before `col`, bottom to top.
    fn scan_col_major_rev(&self, col: usize) -> Option<(usize, usize)> {
        let rows = self.rows();
        (0..col)
            .rev()
            .flat_map(|c| (0..rows).rev().map(move |r| (r, c)))
            .find(|&(r, c)| !self.is_black(r, c))
    }

    /// Mark every filled cell correct or incorrect. Cells without input are
    /// left unchecked, never marked wrong.
    pub fn check(&mut self) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = &mut self.grid[row][col];
                if cell.is_black() || !cell.has_input() {
                    continue;
                }
                cell.is_correct = Some(cell.user_input == cell.answer);
                self.checked[row][col] = true;
            }
        }
    }

    /// Fill in the full solution and mark the session completed.
    /// Irreversible within the session.
    pub fn reveal(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            if cell.is_black() {
                continue;
            }
            cell.user_input = cell.answer;
            cell.is_revealed = true;
            cell.is_correct = Some(true);
        }
        self.completed = true;
    }

    /// Wipe all input, correctness marks, and the checked matrix.
    pub fn clear(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            if cell.is_black() {
                continue;
            }
            cell.user_input = None;
            cell.is_revealed = false;
            cell.is_correct = None;
        }
        for row in &mut self.checked {
            row.fill(false);
        }
    }

    /// True iff every cell along the clue's span has input.
    pub fn is_clue_complete(&self, clue: &Clue) -> bool {
        clue.cells()
            .all(|(r, c)| self.cell(r, c).is_some_and(Cell::has_input))
    }

    /// True iff at least one cell along the clue's span has input.
    pub fn is_clue_started(&self, clue: &Clue) -> bool {
        clue.cells()
            .any(|(r, c)| self.cell(r, c).is_some_and(Cell::has_input))
    }

    /// Score the attempt. Requires every letter cell to be filled;
    /// otherwise reports how far along the grid is.
    pub fn submit(&mut self) -> Submission {
        let mut correct = 0;
        let mut filled = 0;
        let mut total = 0;
        for cell in self.grid.iter().flatten() {
            if cell.is_black() {
                continue;
            }
            total += 1;
            if cell.has_input() {
                filled += 1;
                if cell.user_input == cell.answer {
                    correct += 1;
                }
            }
        }
        if filled < total {
            return Submission::Incomplete { filled, total };
        }
        self.completed = true;
        Submission::Scored(Score { correct, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_puzzle;
    use crate::layout::ClueEntry;
    use crate::puzzle::Difficulty;

    fn puzzle(pairs: &[(&str, &str)]) -> Puzzle {
        let entries: Vec<ClueEntry> = pairs
            .iter()
            .map(|(t, a)| ClueEntry::new(t, a).unwrap())
            .collect();
        build_puzzle("test", "Test", "", Difficulty::Easy, &entries).unwrap()
    }

    /// CAT across and COW down, crossing on the C at (0,0).
    fn cat_cow() -> Puzzle {
        puzzle(&[("pet", "CAT"), ("animal", "COW")])
    }

    #[test]
    fn test_select_black_cell_ignored() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        // (1,1) is a block in the CAT/COW grid.
        assert!(s.cell(1, 1).unwrap().is_black());
        s.select_cell(1, 1, None);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_reselect_toggles_direction_and_highlight() {
        let p = cat_cow();
        let mut s = Session::new(&p);

        s.select_cell(0, 0, None);
        assert_eq!(s.direction(), Direction::Across);
        let across: Vec<bool> = (0..3).map(|c| s.cell(0, c).unwrap().is_highlighted).collect();
        assert_eq!(across, vec![true, true, true]);
        assert!(!s.cell(1, 0).unwrap().is_highlighted);

        // Same cell again: direction flips, highlight follows COW.
        s.select_cell(0, 0, None);
        assert_eq!(s.direction(), Direction::Down);
        let down: Vec<bool> = (0..3).map(|r| s.cell(r, 0).unwrap().is_highlighted).collect();
        assert_eq!(down, vec![true, true, true]);
        assert!(!s.cell(0, 1).unwrap().is_highlighted);
    }

    #[test]
    fn test_word_start_scans_backward() {
        let p = cat_cow();
        let s = Session::new(&p);
        assert_eq!(s.word_start(0, 2, Direction::Across), (0, 0));
        assert_eq!(s.word_start(2, 0, Direction::Down), (0, 0));
        assert_eq!(s.word_start(0, 0, Direction::Across), (0, 0));
    }

    #[test]
    fn test_input_advances_and_check_marks_correct() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.select_cell(0, 0, Some(Direction::Across));

        s.input(Some('c'));
        assert_eq!(s.selected(), Some((0, 1)), "advance after typing");
        s.input(Some('a'));
        s.input(Some('t'));

        s.check();
        for col in 0..3 {
            let cell = s.cell(0, col).unwrap();
            assert_eq!(cell.is_correct, Some(true));
            assert!(s.was_checked(0, col));
        }
    }

    #[test]
    fn test_check_skips_empty_cells() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.select_cell(0, 1, Some(Direction::Across));
        s.input(Some('X'));
        s.check();

        assert_eq!(s.cell(0, 1).unwrap().is_correct, Some(false));
        assert_eq!(s.cell(0, 0).unwrap().is_correct, None);
        assert!(!s.was_checked(0, 0));
    }

    #[test]
    fn test_check_idempotent() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.select_cell(0, 0, Some(Direction::Across));
        s.input(Some('C'));
        s.input(Some('Z'));

        s.check();
        let first: Vec<Option<bool>> = s.grid().iter().flatten().map(|c| c.is_correct).collect();
        s.check();
        let second: Vec<Option<bool>> = s.grid().iter().flatten().map(|c| c.is_correct).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_then_previous_returns_home() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        for direction in [Direction::Across, Direction::Down] {
            s.select_cell(0, 0, Some(direction));
            // Force the direction even if a toggle happened.
            s.select_clue(
                p.clues
                    .iter()
                    .find(|c| c.direction == direction)
                    .unwrap(),
            );
            let home = s.selected().unwrap();
            s.move_to_next();
            assert_ne!(s.selected(), Some(home));
            s.move_to_previous();
            assert_eq!(s.selected(), Some(home));
        }
    }

    #[test]
    fn test_next_wraps_to_following_row() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.select_cell(0, 2, Some(Direction::Across));
        // End of CAT: wrap to the first letter cell of row 1 (the O of COW).
        s.move_to_next();
        assert_eq!(s.selected(), Some((1, 0)));
    }

    #[test]
    fn test_next_at_grid_end_stays_put() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.select_cell(2, 0, Some(Direction::Across));
        s.move_to_next();
        assert_eq!(s.selected(), Some((2, 0)));
    }

    #[test]
    fn test_backspace_clears_then_retreats() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.select_cell(0, 0, Some(Direction::Across));
        s.input(Some('C'));
        assert_eq!(s.selected(), Some((0, 1)));

        s.input(Some('A'));
        assert_eq!(s.selected(), Some((0, 2)));
        // Filled cell: backspace clears in place.
        s.input(Some('T'));
        s.move_to_previous();
        assert_eq!(s.selected(), Some((0, 1)));
        s.backspace();
        assert_eq!(s.cell(0, 1).unwrap().user_input, None);
        assert_eq!(s.selected(), Some((0, 1)));
        // Now empty: backspace retreats without clearing the neighbor.
        s.backspace();
        assert_eq!(s.selected(), Some((0, 0)));
        assert_eq!(s.cell(0, 0).unwrap().user_input, Some('C'));
    }

    #[test]
    fn test_select_clue_jumps_and_forces_direction() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        let down = p.clues.down.first().unwrap();
        s.select_cell(0, 2, Some(Direction::Across));
        s.select_clue(down);
        assert_eq!(s.selected(), Some((down.row, down.col)));
        assert_eq!(s.direction(), Direction::Down);
        assert!(s.cell(2, 0).unwrap().is_highlighted);
    }

    #[test]
    fn test_reveal_then_submit_is_perfect() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.reveal();
        assert!(s.is_completed());
        match s.submit() {
            Submission::Scored(score) => {
                assert_eq!(score.correct, score.total);
                assert_eq!(score.total, p.letter_cell_count());
            }
            Submission::Incomplete { .. } => panic!("revealed grid must be complete"),
        }
    }

    #[test]
    fn test_submit_blocks_incomplete() {
        // CAT + TIGER share a T: 3 + 5 - 1 = 7 letter cells.
        let p = puzzle(&[("pet", "CAT"), ("big cat", "TIGER")]);
        assert_eq!(p.letter_cell_count(), 7);

        let mut s = Session::new(&p);
        let clue = p.clues.iter().find(|c| c.answer == "TIGER").unwrap();
        s.select_clue(clue);
        for ch in "TIGER".chars() {
            s.input(Some(ch));
        }
        assert_eq!(
            s.submit(),
            Submission::Incomplete { filled: 5, total: 7 }
        );
        assert!(!s.is_completed());
    }

    #[test]
    fn test_clear_resets_everything() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        s.select_cell(0, 0, Some(Direction::Across));
        s.input(Some('C'));
        s.input(Some('X'));
        s.check();
        s.clear();

        for cell in s.grid().iter().flatten() {
            if cell.is_black() {
                continue;
            }
            assert_eq!(cell.user_input, None);
            assert_eq!(cell.is_correct, None);
            assert!(!cell.is_revealed);
        }
        for row in 0..3 {
            for col in 0..3 {
                assert!(!s.was_checked(row, col));
            }
        }
    }

    #[test]
    fn test_clue_complete_and_started() {
        let p = cat_cow();
        let mut s = Session::new(&p);
        let across = p.clues.across.first().unwrap().clone();

        assert!(!s.is_clue_started(&across));
        assert!(!s.is_clue_complete(&across));

        s.select_clue(&across);
        s.input(Some('C'));
        assert!(s.is_clue_started(&across));
        assert!(!s.is_clue_complete(&across));

        s.input(Some('A'));
        s.input(Some('T'));
        assert!(s.is_clue_complete(&across));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let p = cat_cow();
        let mut a = Session::new(&p);
        let b = Session::new(&p);
        a.select_cell(0, 0, Some(Direction::Across));
        a.input(Some('C'));
        assert!(a.cell(0, 0).unwrap().has_input());
        assert!(!b.cell(0, 0).unwrap().has_input());
        assert!(!p.grid[0][0].has_input());
    }
}
