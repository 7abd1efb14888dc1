//! File-backed puzzle repository: list all, append one.
//!
//! An explicit store object is constructed once at startup and handed to the
//! app, so there is no hidden global puzzle cache. The store keeps a JSON
//! list of fully laid-out puzzles under the platform data directory and
//! seeds itself with the bundled starter puzzles on first run.

use crossword_core::{build_puzzle, ClueEntry, Difficulty, Puzzle, PuzzleError};
use std::fs;
use std::io;
use std::path::PathBuf;

pub struct PuzzleStore {
    path: PathBuf,
}

impl PuzzleStore {
    /// Store under the platform-local data directory.
    pub fn open_default() -> Self {
        let path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("crossword_puzzles.json");
        Self { path }
    }

    /// Store under an explicit directory (CLI override, tests).
    pub fn open_in(dir: PathBuf) -> Self {
        Self {
            path: dir.join("crossword_puzzles.json"),
        }
    }

    /// Load every stored puzzle, seeding the file with the starter set when
    /// it does not exist yet. An unreadable file degrades to the starters.
    pub fn list(&self) -> Vec<Puzzle> {
        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|_| starter_puzzles()),
            Err(_) => {
                let puzzles = starter_puzzles();
                let _ = self.save(&puzzles);
                puzzles
            }
        }
    }

    /// Append a newly built puzzle to the stored list.
    pub fn append(&self, puzzle: Puzzle) -> io::Result<()> {
        let mut puzzles = self.list();
        puzzles.push(puzzle);
        self.save(&puzzles)
    }

    /// Look up a puzzle by id.
    pub fn find(&self, id: &str) -> Result<Puzzle, PuzzleError> {
        self.list()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PuzzleError::PuzzleNotFound { id: id.to_string() })
    }

    fn save(&self, puzzles: &[Puzzle]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(puzzles)?;
        fs::write(&self.path, json)
    }
}

/// The bundled starter puzzles, laid out at first launch.
fn starter_puzzles() -> Vec<Puzzle> {
    let sets: [(&str, &str, Difficulty, &str, &[(&str, &str)]); 4] = [
        (
            "animals",
            "Animal Kingdom",
            Difficulty::Easy,
            "A fun crossword about animals from around the world.",
            &[
                ("Domestic feline pet", "CAT"),
                ("Man's best friend", "DOG"),
                ("Howls at the moon", "WOLF"),
                ("Large omnivore that hibernates", "BEAR"),
                ("Striped big cat", "TIGER"),
                ("Produces milk for humans", "COW"),
                ("Long-necked African animal", "GIRAFFE"),
            ],
        ),
        (
            "fruits",
            "Fruity Delights",
            Difficulty::Medium,
            "Test your knowledge of various fruits from around the world.",
            &[
                ("Red or green fruit, keeps the doctor away", "APPLE"),
                ("Yellow curved fruit", "BANANA"),
                ("Small round fruit that grows in clusters", "GRAPE"),
                ("Citrus fruit with the same name as a color", "ORANGE"),
                ("Soft fuzzy fruit with a large pit", "PEACH"),
                ("Tropical spiky fruit", "PINEAPPLE"),
                ("Green tropical fruit with a creamy texture", "KIWI"),
            ],
        ),
        (
            "countries",
            "World Countries",
            Difficulty::Hard,
            "Challenge yourself with this crossword about countries around the world.",
            &[
                ("Island nation known for sushi and anime", "JAPAN"),
                ("Largest country in South America", "BRAZIL"),
                ("Home to the Pyramids and Sphinx", "EGYPT"),
                ("European country known for wine and fashion", "FRANCE"),
                ("Largest country by area", "RUSSIA"),
                ("Known for Taj Mahal and Bollywood", "INDIA"),
                ("Boot-shaped Mediterranean country", "ITALY"),
            ],
        ),
        (
            "technology",
            "Tech World",
            Difficulty::Medium,
            "A crossword about technology, computers, and gadgets.",
            &[
                ("Portable computer", "LAPTOP"),
                ("Pointing device for computers", "MOUSE"),
                ("Computer that provides data to other computers", "SERVER"),
                ("Portable touchscreen device", "TABLET"),
                ("Output device for visual display", "MONITOR"),
                ("Central processing unit", "CPU"),
                ("Device used to print documents", "PRINTER"),
            ],
        ),
    ];

    sets.iter()
        .filter_map(|(id, title, difficulty, description, pairs)| {
            let entries: Vec<ClueEntry> = pairs
                .iter()
                .filter_map(|(text, answer)| ClueEntry::new(text, answer).ok())
                .collect();
            build_puzzle(id, title, description, *difficulty, &entries).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_puzzles_build() {
        let puzzles = starter_puzzles();
        assert_eq!(puzzles.len(), 4);
        for puzzle in &puzzles {
            assert!(!puzzle.clues.is_empty());
            assert!(puzzle.letter_cell_count() > 0);
        }
    }

    #[test]
    fn test_roundtrip_through_store() {
        let dir = std::env::temp_dir().join(format!(
            "crossword-store-test-{}",
            std::process::id()
        ));
        let store = PuzzleStore::open_in(dir.clone());

        let first = store.list();
        assert_eq!(first.len(), 4);

        let entries = vec![ClueEntry::new("pet", "CAT").unwrap(), ClueEntry::new("cow", "COW").unwrap()];
        let extra = build_puzzle("extra", "Extra", "", Difficulty::Easy, &entries).unwrap();
        store.append(extra.clone()).unwrap();

        assert_eq!(store.list().len(), 5);
        assert_eq!(store.find("extra").unwrap(), extra);
        assert!(matches!(
            store.find("nope"),
            Err(PuzzleError::PuzzleNotFound { .. })
        ));

        let _ = fs::remove_dir_all(dir);
    }
}
