//! Basic example of using the crossword engine

use crossword_core::{build_puzzle, ClueEntry, Difficulty, Session, Submission};

fn main() {
    let entries: Vec<ClueEntry> = [
        ("Domestic feline pet", "CAT"),
        ("Man's best friend", "DOG"),
        ("Howls at the moon", "WOLF"),
        ("Striped big cat", "TIGER"),
        ("Produces milk for humans", "COW"),
        ("Long-necked African animal", "GIRAFFE"),
    ]
    .iter()
    .map(|(text, answer)| ClueEntry::new(text, answer).expect("valid entry"))
    .collect();

    let puzzle = build_puzzle(
        "animals",
        "Animal Kingdom",
        "A fun crossword about animals from around the world.",
        Difficulty::Easy,
        &entries,
    )
    .expect("non-empty clue list");

    println!("{} ({} difficulty)", puzzle.title, puzzle.difficulty);
    println!("Grid: {}x{}\n", puzzle.rows(), puzzle.cols());

    for row in &puzzle.grid {
        let line: String = row
            .iter()
            .map(|cell| cell.answer.unwrap_or('#'))
            .collect();
        println!("{}", line);
    }

    println!("\nAcross:");
    for clue in &puzzle.clues.across {
        println!("  {}. {} ({})", clue.number, clue.text, clue.len());
    }
    println!("Down:");
    for clue in &puzzle.clues.down {
        println!("  {}. {} ({})", clue.number, clue.text, clue.len());
    }

    // Play a session: reveal everything, then score it.
    let mut session = Session::new(&puzzle);
    session.reveal();
    match session.submit() {
        Submission::Scored(score) => {
            println!("\nScore: {}/{}", score.correct, score.total)
        }
        Submission::Incomplete { filled, total } => {
            println!("\nIncomplete: {}/{}", filled, total)
        }
    }
}
