use crossword_core::{Clue, Puzzle, Score, Session, Submission};
use std::time::{Duration, Instant};

/// One play-through of a puzzle: the session plus the elapsed-time clock
/// and the final score once submitted.
pub struct Game {
    puzzle: Puzzle,
    session: Session,
    start_time: Instant,
    elapsed: Duration,
    score: Option<Score>,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Self {
        let session = Session::new(&puzzle);
        Self {
            puzzle,
            session,
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            score: None,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Elapsed play time; frozen once the session is completed.
    pub fn elapsed(&self) -> Duration {
        if self.session.is_completed() {
            self.elapsed
        } else {
            self.elapsed + self.start_time.elapsed()
        }
    }

    /// Format the elapsed time as MM:SS.
    pub fn elapsed_string(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Restart the attempt: fresh grid copy, clock reset.
    pub fn reset(&mut self) {
        self.session = Session::new(&self.puzzle);
        self.start_time = Instant::now();
        self.elapsed = Duration::ZERO;
        self.score = None;
    }

    /// Reveal the full solution, stopping the clock.
    pub fn reveal(&mut self) {
        if !self.session.is_completed() {
            self.elapsed += self.start_time.elapsed();
        }
        self.session.reveal();
    }

    /// Submit the attempt. A scored submission freezes the clock.
    pub fn submit(&mut self) -> Submission {
        let already_done = self.session.is_completed();
        let submission = self.session.submit();
        if let Submission::Scored(score) = submission {
            self.score = Some(score);
            if !already_done {
                self.elapsed += self.start_time.elapsed();
            }
        }
        submission
    }

    /// The clue containing the selected cell in the selected direction.
    pub fn selected_clue(&self) -> Option<&Clue> {
        let (row, col) = self.session.selected()?;
        let direction = self.session.direction();
        let start = self.session.word_start(row, col, direction);
        self.puzzle
            .clues
            .iter()
            .find(|clue| clue.direction == direction && (clue.row, clue.col) == start)
    }
}
