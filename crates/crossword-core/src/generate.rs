//! Boundary type for the external puzzle-generation service.
//!
//! The service answers a topic prompt with a JSON object carrying title,
//! description, difficulty, and a flat clue list. The request itself is the
//! caller's concern; this module only validates the response so layout never
//! runs on a malformed or empty word set.

use crate::builder::build_puzzle;
use crate::error::{PuzzleError, Result};
use crate::layout::ClueEntry;
use crate::puzzle::{Difficulty, Puzzle};
use serde::{Deserialize, Serialize};

/// One clue/answer pair as produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    pub clue: String,
    pub answer: String,
}

/// A generation response, not yet laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub clues: Vec<RawClue>,
}

impl GeneratedPuzzle {
    /// Parse and validate a generation response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let parsed: GeneratedPuzzle =
            serde_json::from_str(body).map_err(|e| PuzzleError::MalformedResponse {
                reason: e.to_string(),
            })?;
        if parsed.clues.is_empty() {
            return Err(PuzzleError::EmptyClueList);
        }
        Ok(parsed)
    }

    /// Validate the clue pairs and lay the puzzle out under the given id.
    pub fn into_puzzle(self, id: &str) -> Result<Puzzle> {
        let entries = self
            .clues
            .iter()
            .map(|c| ClueEntry::new(&c.clue, &c.answer))
            .collect::<Result<Vec<_>>>()?;
        build_puzzle(id, &self.title, &self.description, self.difficulty, &entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "title": "Indian Culture Crossword",
        "description": "Test your knowledge of Indian culture",
        "difficulty": "medium",
        "clues": [
            { "clue": "Traditional Indian dress for women", "answer": "SARI" },
            { "clue": "India's national bird", "answer": "PEACOCK" },
            { "clue": "Holy river of India", "answer": "GANGES" },
            { "clue": "Indian bread", "answer": "NAAN" }
        ]
    }"#;

    #[test]
    fn test_parse_response() {
        let generated = GeneratedPuzzle::from_json(RESPONSE).unwrap();
        assert_eq!(generated.difficulty, Difficulty::Medium);
        assert_eq!(generated.clues.len(), 4);
    }

    #[test]
    fn test_response_builds_puzzle() {
        let puzzle = GeneratedPuzzle::from_json(RESPONSE)
            .unwrap()
            .into_puzzle("indian-culture")
            .unwrap();
        assert_eq!(puzzle.id, "indian-culture");
        assert_eq!(puzzle.clues.len(), 4);
        assert!(puzzle.letter_cell_count() > 0);
    }

    #[test]
    fn test_malformed_body_rejected() {
        let err = GeneratedPuzzle::from_json("not json at all").unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedResponse { .. }));
    }

    #[test]
    fn test_empty_clue_list_rejected() {
        let body = r#"{"title": "t", "description": "d", "clues": []}"#;
        let err = GeneratedPuzzle::from_json(body).unwrap_err();
        assert_eq!(err, PuzzleError::EmptyClueList);
    }

    #[test]
    fn test_missing_difficulty_defaults_to_medium() {
        let body = r#"{"title": "t", "description": "d",
                       "clues": [{"clue": "x", "answer": "AB"}]}"#;
        let generated = GeneratedPuzzle::from_json(body).unwrap();
        assert_eq!(generated.difficulty, Difficulty::Medium);
    }
}
