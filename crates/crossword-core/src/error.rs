use thiserror::Error;

/// Error taxonomy for the crossword engine boundaries.
///
/// Layout itself never fails (unplaceable words fall back to a disconnected
/// slot); these errors come from validating input at the edges: authored clue
/// lists, generation responses, and puzzle lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("clue list is empty")]
    EmptyClueList,
    #[error("answer {answer:?} is too short, need at least 2 letters")]
    AnswerTooShort { answer: String },
    #[error("answer {answer:?} contains non-letter characters")]
    InvalidAnswer { answer: String },
    #[error("malformed clue line {line_no}: {line:?}, expected \"<clue> | <ANSWER>\"")]
    MalformedClueLine { line_no: usize, line: String },
    #[error("malformed generation response: {reason}")]
    MalformedResponse { reason: String },
    #[error("puzzle {id:?} not found")]
    PuzzleNotFound { id: String },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
