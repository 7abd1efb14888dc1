use serde::{Deserialize, Serialize};
use std::fmt;

/// Word orientation on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The other orientation (across <-> down).
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Puzzle difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// One grid position.
///
/// A block cell carries `answer: None` and never holds a number, user input,
/// or correctness state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// The correct letter, or `None` for a block.
    pub answer: Option<char>,
    /// Set iff this cell starts an across or down word.
    pub number: Option<u32>,
    /// What the player typed here.
    pub user_input: Option<char>,
    pub is_revealed: bool,
    /// Tri-state: unset until an explicit check pass.
    pub is_correct: Option<bool>,
    /// Part of the currently selected word span.
    pub is_highlighted: bool,
}

impl Cell {
    /// A block cell holding no letter.
    pub fn black(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            answer: None,
            number: None,
            user_input: None,
            is_revealed: false,
            is_correct: None,
            is_highlighted: false,
        }
    }

    /// A letter cell with the given solution character.
    pub fn letter(row: usize, col: usize, answer: char) -> Self {
        Self {
            answer: Some(answer),
            ..Self::black(row, col)
        }
    }

    pub fn is_black(&self) -> bool {
        self.answer.is_none()
    }

    pub fn has_input(&self) -> bool {
        self.user_input.is_some()
    }
}

/// One placed word with its prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    pub text: String,
    pub answer: String,
    /// Coordinates of the first letter.
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Clue {
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// The coordinates of every cell along this word's span.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col, dir) = (self.row, self.col, self.direction);
        (0..self.len()).map(move |i| match dir {
            Direction::Across => (row, col + i),
            Direction::Down => (row + i, col),
        })
    }
}

/// Clue lists by orientation, each sorted by number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clues {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

impl Clues {
    /// All clues, across first, for linear clue navigation.
    pub fn iter(&self) -> impl Iterator<Item = &Clue> {
        self.across.iter().chain(self.down.iter())
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}

/// A complete puzzle definition: immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Rectangular cell matrix, all rows equal length.
    pub grid: Vec<Vec<Cell>>,
    pub clues: Clues,
}

impl Puzzle {
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|r| r.get(col))
    }

    /// Count of non-black cells.
    pub fn letter_cell_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|c| !c.is_black())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_toggle() {
        assert_eq!(Direction::Across.toggled(), Direction::Down);
        assert_eq!(Direction::Down.toggled(), Direction::Across);
    }

    #[test]
    fn test_clue_cells_span() {
        let clue = Clue {
            number: 1,
            text: "pet".into(),
            answer: "CAT".into(),
            row: 2,
            col: 1,
            direction: Direction::Down,
        };
        let cells: Vec<_> = clue.cells().collect();
        assert_eq!(cells, vec![(2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_cell_serde_roundtrip() {
        let cell = Cell::letter(0, 3, 'A');
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        let d: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
    }
}
