//! Manual puzzle authoring: one clue per line, `"<clue text> | <ANSWER>"`.
//!
//! Malformed lines are rejected with their line number rather than silently
//! coerced; blank lines are skipped.

use crate::error::{PuzzleError, Result};
use crate::layout::ClueEntry;

/// Parse an authored clue list into validated entries.
pub fn parse_clue_list(text: &str) -> Result<Vec<ClueEntry>> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || PuzzleError::MalformedClueLine {
            line_no: i + 1,
            line: line.to_string(),
        };
        let (clue, answer) = line.split_once('|').ok_or_else(malformed)?;
        if clue.trim().is_empty() || answer.trim().is_empty() {
            return Err(malformed());
        }
        entries.push(ClueEntry::new(clue, answer)?);
    }
    if entries.is_empty() {
        return Err(PuzzleError::EmptyClueList);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_lines() {
        let entries = parse_clue_list(
            "Domestic feline pet | cat\n\nMan's best friend | DOG\n",
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "Domestic feline pet");
        assert_eq!(entries[0].answer, "CAT");
        assert_eq!(entries[1].answer, "DOG");
    }

    #[test]
    fn test_missing_separator_rejected() {
        let err = parse_clue_list("no separator here").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::MalformedClueLine { line_no: 1, .. }
        ));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let err = parse_clue_list("a clue | ").unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedClueLine { .. }));
    }

    #[test]
    fn test_invalid_answer_propagates() {
        let err = parse_clue_list("a clue | TWO WORDS").unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidAnswer { .. }));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(parse_clue_list("\n\n").unwrap_err(), PuzzleError::EmptyClueList);
    }
}
