//! Grid layout engine.
//!
//! Places an unordered set of answers on an unbounded plane so that words
//! intersect on shared letters, then normalizes coordinates into a compact
//! rectangular grid. Placement never fails: a word with no viable
//! intersection is parked in a free area below the grid, disconnected but
//! still valid.

use crate::error::{PuzzleError, Result};
use crate::puzzle::Direction;
use std::collections::HashMap;

/// A validated clue/answer pair, ready for layout.
///
/// Answers are uppercased at construction; anything other than 2+ ASCII
/// letters is rejected rather than coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    pub text: String,
    pub answer: String,
}

impl ClueEntry {
    pub fn new(text: &str, answer: &str) -> Result<Self> {
        let answer = answer.trim().to_uppercase();
        if !answer.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PuzzleError::InvalidAnswer { answer });
        }
        if answer.chars().count() < 2 {
            return Err(PuzzleError::AnswerTooShort { answer });
        }
        Ok(Self {
            text: text.trim().to_string(),
            answer,
        })
    }
}

/// A word placed on the normalized grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub text: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// The result of layout: normalized placements plus grid dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub words: Vec<PlacedWord>,
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    /// Materialize the character grid, `None` marking block cells.
    pub fn char_table(&self) -> Vec<Vec<Option<char>>> {
        let mut table = vec![vec![None; self.cols]; self.rows];
        for word in &self.words {
            for (i, ch) in word.answer.chars().enumerate() {
                match word.direction {
                    Direction::Across => table[word.row][word.col + i] = Some(ch),
                    Direction::Down => table[word.row + i][word.col] = Some(ch),
                }
            }
        }
        table
    }
}

/// A word placed in unnormalized (possibly negative) coordinates.
#[derive(Debug, Clone)]
struct RawPlacement {
    entry_index: usize,
    chars: Vec<char>,
    row: i32,
    col: i32,
    direction: Direction,
}

impl RawPlacement {
    fn cell(&self, i: usize) -> (i32, i32) {
        match self.direction {
            Direction::Across => (self.row, self.col + i as i32),
            Direction::Down => (self.row + i as i32, self.col),
        }
    }
}

/// A viable candidate placement with its heuristic score components.
struct Candidate {
    row: i32,
    col: i32,
    direction: Direction,
    intersections: usize,
    area: i64,
}

/// Letter occupancy of the plane during placement.
#[derive(Default)]
struct Board {
    cells: HashMap<(i32, i32), char>,
    min_row: i32,
    max_row: i32,
    min_col: i32,
    max_col: i32,
}

impl Board {
    fn letter_at(&self, row: i32, col: i32) -> Option<char> {
        self.cells.get(&(row, col)).copied()
    }

    fn is_empty_at(&self, row: i32, col: i32) -> bool {
        !self.cells.contains_key(&(row, col))
    }

    fn place(&mut self, placement: &RawPlacement) {
        for (i, &ch) in placement.chars.iter().enumerate() {
            let (r, c) = placement.cell(i);
            self.cells.insert((r, c), ch);
            if self.cells.len() == 1 {
                (self.min_row, self.max_row) = (r, r);
                (self.min_col, self.max_col) = (c, c);
            } else {
                self.min_row = self.min_row.min(r);
                self.max_row = self.max_row.max(r);
                self.min_col = self.min_col.min(c);
                self.max_col = self.max_col.max(c);
            }
        }
    }

    /// Bounding-box area if a word of `len` cells were placed at the
    /// given origin.
    fn area_with(&self, row: i32, col: i32, direction: Direction, len: usize) -> i64 {
        let (end_row, end_col) = match direction {
            Direction::Across => (row, col + len as i32 - 1),
            Direction::Down => (row + len as i32 - 1, col),
        };
        let height = (self.max_row.max(end_row) - self.min_row.min(row) + 1) as i64;
        let width = (self.max_col.max(end_col) - self.min_col.min(col) + 1) as i64;
        height * width
    }

    /// Check a placement against the adjacency rules and count its
    /// intersections. Returns `None` when the placement is not viable.
    ///
    /// Rules: every overlap must match letters exactly; the cells just
    /// before and after the word in its own line must be empty; a
    /// non-crossing cell must have empty perpendicular neighbors so no two
    /// parallel words touch without a gap; the word must claim at least one
    /// new cell, otherwise it would sit entirely on top of existing words.
    fn check(&self, chars: &[char], row: i32, col: i32, direction: Direction) -> Option<usize> {
        let len = chars.len() as i32;
        let (before, after) = match direction {
            Direction::Across => ((row, col - 1), (row, col + len)),
            Direction::Down => ((row - 1, col), (row + len, col)),
        };
        if !self.is_empty_at(before.0, before.1) || !self.is_empty_at(after.0, after.1) {
            return None;
        }

        let mut intersections = 0;
        for (i, &ch) in chars.iter().enumerate() {
            let (r, c) = match direction {
                Direction::Across => (row, col + i as i32),
                Direction::Down => (row + i as i32, col),
            };
            match self.letter_at(r, c) {
                Some(existing) => {
                    if existing != ch {
                        return None;
                    }
                    intersections += 1;
                }
                None => {
                    let clear = match direction {
                        Direction::Across => {
                            self.is_empty_at(r - 1, c) && self.is_empty_at(r + 1, c)
                        }
                        Direction::Down => {
                            self.is_empty_at(r, c - 1) && self.is_empty_at(r, c + 1)
                        }
                    };
                    if !clear {
                        return None;
                    }
                }
            }
        }
        if intersections == chars.len() {
            return None;
        }
        Some(intersections)
    }
}

/// Lay out the given entries. Empty input yields an empty layout; the
/// boundaries reject empty clue lists before reaching this point.
pub fn generate_layout(entries: &[ClueEntry]) -> Layout {
    // Longest-first gives short connector words more letters to hook onto.
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(entries[i].answer.chars().count()));

    let mut board = Board::default();
    let mut placements: Vec<RawPlacement> = Vec::with_capacity(entries.len());

    for &index in &order {
        let chars: Vec<char> = entries[index].answer.chars().collect();
        let placement = if placements.is_empty() {
            // Seed word anchors the grid horizontally at the origin.
            RawPlacement {
                entry_index: index,
                chars,
                row: 0,
                col: 0,
                direction: Direction::Across,
            }
        } else {
            match best_candidate(&board, &placements, &chars) {
                Some(c) => RawPlacement {
                    entry_index: index,
                    chars,
                    row: c.row,
                    col: c.col,
                    direction: c.direction,
                },
                // No valid intersection anywhere: park the word two rows
                // below the bounding box, separated from everything.
                None => RawPlacement {
                    entry_index: index,
                    chars,
                    row: board.max_row + 2,
                    col: board.min_col,
                    direction: Direction::Across,
                },
            }
        };
        board.place(&placement);
        placements.push(placement);
    }

    normalize(entries, placements, &board)
}

/// Enumerate every shared-letter alignment against every placed word and
/// pick the best viable candidate.
///
/// Tie-break order: most intersections, smallest bounding box, lowest row,
/// lowest column, across before down.
fn best_candidate(
    board: &Board,
    placements: &[RawPlacement],
    chars: &[char],
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for placed in placements {
        for (placed_i, &placed_ch) in placed.chars.iter().enumerate() {
            for (new_i, &new_ch) in chars.iter().enumerate() {
                if placed_ch != new_ch {
                    continue;
                }
                // Cross perpendicular to the word we intersect.
                let direction = placed.direction.toggled();
                let (anchor_row, anchor_col) = placed.cell(placed_i);
                let (row, col) = match direction {
                    Direction::Across => (anchor_row, anchor_col - new_i as i32),
                    Direction::Down => (anchor_row - new_i as i32, anchor_col),
                };
                let Some(intersections) = board.check(chars, row, col, direction) else {
                    continue;
                };
                let candidate = Candidate {
                    row,
                    col,
                    direction,
                    intersections,
                    area: board.area_with(row, col, direction, chars.len()),
                };
                if best.as_ref().is_none_or(|b| better(&candidate, b)) {
                    best = Some(candidate);
                }
            }
        }
    }
    best
}

fn better(a: &Candidate, b: &Candidate) -> bool {
    let key = |c: &Candidate| {
        (
            std::cmp::Reverse(c.intersections),
            c.area,
            c.row,
            c.col,
            c.direction == Direction::Down,
        )
    };
    key(a) < key(b)
}

/// Shift all placements so the minimum row/col is 0 and compute grid size.
fn normalize(entries: &[ClueEntry], placements: Vec<RawPlacement>, board: &Board) -> Layout {
    if placements.is_empty() {
        return Layout::default();
    }
    let words = placements
        .into_iter()
        .map(|p| PlacedWord {
            text: entries[p.entry_index].text.clone(),
            answer: entries[p.entry_index].answer.clone(),
            row: (p.row - board.min_row) as usize,
            col: (p.col - board.min_col) as usize,
            direction: p.direction,
        })
        .collect();
    Layout {
        words,
        rows: (board.max_row - board.min_row + 1) as usize,
        cols: (board.max_col - board.min_col + 1) as usize,
    }
}
