//! Core crossword engine.
//!
//! Takes an unordered list of clue/answer pairs, lays them out on a 2-D grid
//! with valid intersections, numbers the cells, and drives an interactive
//! play session over the result: cell selection, word highlighting,
//! auto-advance typing, check/reveal/clear, and submission scoring.
//!
//! The crate is pure data + logic; terminals, storage, and the external
//! puzzle-generation service live in the consuming application.

pub mod authoring;
pub mod builder;
pub mod error;
pub mod generate;
pub mod layout;
pub mod puzzle;
pub mod session;

pub use authoring::parse_clue_list;
pub use builder::build_puzzle;
pub use error::PuzzleError;
pub use generate::GeneratedPuzzle;
pub use layout::{generate_layout, ClueEntry, Layout, PlacedWord};
pub use puzzle::{Cell, Clue, Clues, Difficulty, Direction, Puzzle};
pub use session::{Score, Session, Submission};
