//! Cell/clue model builder.
//!
//! Pure transformation from a [`Layout`] to the addressable [`Puzzle`]
//! model: the cell matrix with per-cell metadata and the numbered
//! across/down clue lists. Deterministic and stateless, so the play session
//! never needs to know how placement was computed.

use crate::error::{PuzzleError, Result};
use crate::layout::{generate_layout, ClueEntry, Layout};
use crate::puzzle::{Cell, Clue, Clues, Difficulty, Direction, Puzzle};

/// Lay out the entries and build the full puzzle model.
pub fn build_puzzle(
    id: &str,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    entries: &[ClueEntry],
) -> Result<Puzzle> {
    if entries.is_empty() {
        return Err(PuzzleError::EmptyClueList);
    }
    let layout = generate_layout(entries);
    Ok(from_layout(id, title, description, difficulty, &layout))
}

/// Build the puzzle model from precomputed placements.
pub fn from_layout(
    id: &str,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    layout: &Layout,
) -> Puzzle {
    let table = layout.char_table();
    let numbers = number_cells(&table);

    let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(layout.rows);
    for (row, chars) in table.iter().enumerate() {
        let mut cells = Vec::with_capacity(layout.cols);
        for (col, ch) in chars.iter().enumerate() {
            let mut cell = match ch {
                Some(ch) => Cell::letter(row, col, *ch),
                None => Cell::black(row, col),
            };
            cell.number = numbers[row][col];
            cells.push(cell);
        }
        grid.push(cells);
    }

    let mut clues = Clues::default();
    for word in &layout.words {
        // The start cell always has a number: every placed word is a run
        // of length >= 2 beginning there.
        let number = numbers[word.row][word.col].unwrap_or(0);
        let clue = Clue {
            number,
            text: word.text.clone(),
            answer: word.answer.clone(),
            row: word.row,
            col: word.col,
            direction: word.direction,
        };
        match word.direction {
            Direction::Across => clues.across.push(clue),
            Direction::Down => clues.down.push(clue),
        }
    }
    clues.across.sort_by_key(|c| c.number);
    clues.down.sort_by_key(|c| c.number);

    Puzzle {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
        grid,
        clues,
    }
}

/// Row-major numbering scan: a cell receives the next sequential number iff
/// it is non-black and starts an across run of length >= 2 or a down run of
/// length >= 2.
fn number_cells(table: &[Vec<Option<char>>]) -> Vec<Vec<Option<u32>>> {
    let rows = table.len();
    let cols = table.first().map_or(0, Vec::len);
    let filled = |r: usize, c: usize| r < rows && c < cols && table[r][c].is_some();

    let mut numbers = vec![vec![None; cols]; rows];
    let mut next = 1;
    for row in 0..rows {
        for col in 0..cols {
            if table[row][col].is_none() {
                continue;
            }
            let starts_across = (col == 0 || !filled(row, col - 1)) && filled(row, col + 1);
            let starts_down = (row == 0 || !filled(row - 1, col)) && filled(row + 1, col);
            if starts_across || starts_down {
                numbers[row][col] = Some(next);
                next += 1;
            }
        }
    }
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<ClueEntry> {
        pairs
            .iter()
            .map(|(t, a)| ClueEntry::new(t, a).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_clue_list_rejected() {
        let err = build_puzzle("p", "t", "d", Difficulty::Easy, &[]).unwrap_err();
        assert_eq!(err, PuzzleError::EmptyClueList);
    }

    #[test]
    fn test_crossing_words_share_number_one() {
        let puzzle = build_puzzle(
            "animals",
            "Animals",
            "",
            Difficulty::Easy,
            &entries(&[("pet", "CAT"), ("animal", "COW")]),
        )
        .unwrap();

        assert_eq!(puzzle.clues.across.len(), 1);
        assert_eq!(puzzle.clues.down.len(), 1);
        // Both words start at the shared C cell, so both carry number 1.
        assert_eq!(puzzle.clues.across[0].number, 1);
        assert_eq!(puzzle.clues.down[0].number, 1);
        let start = puzzle.cell(0, 0).unwrap();
        assert_eq!(start.number, Some(1));
        assert_eq!(start.answer, Some('C'));
    }

    #[test]
    fn test_number_iff_word_start() {
        let puzzle = build_puzzle(
            "animals",
            "Animal Kingdom",
            "",
            Difficulty::Easy,
            &entries(&[
                ("Domestic feline pet", "CAT"),
                ("Man's best friend", "DOG"),
                ("Howls at the moon", "WOLF"),
                ("Large omnivore that hibernates", "BEAR"),
                ("Striped big cat", "TIGER"),
                ("Produces milk for humans", "COW"),
                ("Long-necked African animal", "GIRAFFE"),
            ]),
        )
        .unwrap();

        let starts: std::collections::HashSet<(usize, usize)> = puzzle
            .clues
            .iter()
            .map(|clue| (clue.row, clue.col))
            .collect();
        for cell in puzzle.grid.iter().flatten() {
            let is_start = starts.contains(&(cell.row, cell.col));
            assert_eq!(
                cell.number.is_some(),
                is_start,
                "cell ({},{}) numbering mismatch",
                cell.row,
                cell.col
            );
            if cell.is_black() {
                assert!(cell.number.is_none());
            }
        }
    }

    #[test]
    fn test_numbers_sequential_row_major() {
        let puzzle = build_puzzle(
            "tech",
            "Tech World",
            "",
            Difficulty::Medium,
            &entries(&[
                ("Portable computer", "LAPTOP"),
                ("Pointing device", "MOUSE"),
                ("Serves data", "SERVER"),
                ("Touchscreen device", "TABLET"),
            ]),
        )
        .unwrap();

        let mut numbered: Vec<(usize, usize, u32)> = puzzle
            .grid
            .iter()
            .flatten()
            .filter_map(|c| c.number.map(|n| (c.row, c.col, n)))
            .collect();
        numbered.sort_by_key(|&(r, c, _)| (r, c));
        for (i, &(_, _, n)) in numbered.iter().enumerate() {
            assert_eq!(n, i as u32 + 1);
        }
    }

    #[test]
    fn test_clue_spans_match_grid_letters() {
        let puzzle = build_puzzle(
            "fruits",
            "Fruity Delights",
            "",
            Difficulty::Medium,
            &entries(&[
                ("Keeps the doctor away", "APPLE"),
                ("Yellow curved fruit", "BANANA"),
                ("Grows in clusters", "GRAPE"),
                ("Same name as a color", "ORANGE"),
                ("Fuzzy fruit with a pit", "PEACH"),
            ]),
        )
        .unwrap();

        for clue in puzzle.clues.iter() {
            for ((row, col), expected) in clue.cells().zip(clue.answer.chars()) {
                let cell = puzzle.cell(row, col).expect("span inside grid");
                assert_eq!(cell.answer, Some(expected));
            }
        }
    }

    #[test]
    fn test_deterministic_model() {
        let input = entries(&[("a", "JAPAN"), ("b", "BRAZIL"), ("c", "EGYPT")]);
        let a = build_puzzle("p", "t", "d", Difficulty::Hard, &input).unwrap();
        let b = build_puzzle("p", "t", "d", Difficulty::Hard, &input).unwrap();
        assert_eq!(a, b);
    }
}
