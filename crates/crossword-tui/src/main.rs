#![allow(clippy::too_many_arguments)]

mod app;
mod game;
mod render;
mod store;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossword_core::{build_puzzle, parse_clue_list, Difficulty, GeneratedPuzzle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use store::PuzzleStore;

/// Play crossword puzzles in the terminal.
#[derive(Parser)]
#[command(name = "crossword", version, about)]
struct Cli {
    /// Import a generated puzzle from a JSON file, then exit
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Build a puzzle from a "clue|ANSWER" list file, then exit
    #[arg(long, value_name = "FILE")]
    author: Option<PathBuf>,

    /// Title for --author
    #[arg(long, default_value = "Untitled")]
    title: String,

    /// Description for --author
    #[arg(long, default_value = "")]
    description: String,

    /// Difficulty for --author: easy, medium or hard
    #[arg(long, default_value = "medium", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Directory for the puzzle list file (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    match s.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(format!("unknown difficulty '{}'", other)),
    }
}

/// Lowercase alphanumeric id derived from a title ("Tech World" -> "tech-world").
fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let store = match cli.data_dir {
        Some(dir) => PuzzleStore::open_in(dir),
        None => PuzzleStore::open_default(),
    };

    if let Some(path) = cli.import {
        let json = fs::read_to_string(&path)?;
        let generated = GeneratedPuzzle::from_json(&json).map_err(io::Error::other)?;
        let id = slug(&generated.title);
        let puzzle = generated.into_puzzle(&id).map_err(io::Error::other)?;
        println!(
            "Imported '{}' ({} clues, {}x{} grid)",
            puzzle.title,
            puzzle.clues.iter().count(),
            puzzle.rows(),
            puzzle.cols()
        );
        store.append(puzzle)?;
        return Ok(());
    }

    if let Some(path) = cli.author {
        let text = fs::read_to_string(&path)?;
        let entries = parse_clue_list(&text).map_err(io::Error::other)?;
        let id = slug(&cli.title);
        let puzzle = build_puzzle(&id, &cli.title, &cli.description, cli.difficulty, &entries)
            .map_err(io::Error::other)?;
        println!(
            "Built '{}' ({} clues, {}x{} grid)",
            puzzle.title,
            puzzle.clues.iter().count(),
            puzzle.rows(),
            puzzle.cols()
        );
        store.append(puzzle)?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, store: PuzzleStore) -> io::Result<()> {
    let mut app = App::new(store);
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.tick_rate();

        render::render(stdout, &app)?;
        stdout.flush()?;

        // Handle input with timeout so the clock keeps ticking
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
