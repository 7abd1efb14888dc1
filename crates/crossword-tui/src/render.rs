use crate::app::{App, ScreenState};
use crate::theme::difficulty_meta;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use crossword_core::{Cell, Clue, Session};
use std::io;

/// Cell width in characters: number (2) + letter + padding.
const CELL_W: u16 = 5;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;
    match app.screen_state {
        ScreenState::Browse => render_browse_screen(stdout, app, term_width)?,
        ScreenState::Playing => render_game_screen(stdout, app, term_width, term_height)?,
        ScreenState::Result => render_result_screen(stdout, app, term_width, term_height)?,
    }
    execute!(stdout, Show)?;
    Ok(())
}

fn render_browse_screen(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let x = 4;

    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        MoveTo(x, 1),
        SetForegroundColor(theme.fg),
        Print("CROSSWORD PUZZLES"),
        MoveTo(x, 2),
        SetForegroundColor(theme.info),
        Print("Pick a puzzle to play"),
    )?;

    for (i, puzzle) in app.puzzles.iter().enumerate() {
        let y = 4 + i as u16 * 2;
        let selected = i == app.browse_selection;
        let marker = if selected { "> " } else { "  " };
        let fg = if selected { theme.key } else { theme.fg };
        let (skill, time) = difficulty_meta(puzzle.difficulty);

        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(fg),
            Print(format!("{}{}", marker, puzzle.title)),
            SetForegroundColor(theme.difficulty_color(puzzle.difficulty)),
            Print(format!("  [{}]", puzzle.difficulty)),
            SetForegroundColor(theme.info),
            Print(format!("  {} {}", skill, time)),
        )?;
        let description: String = puzzle
            .description
            .chars()
            .take((term_width as usize).saturating_sub(8))
            .collect();
        execute!(
            stdout,
            MoveTo(x + 2, y + 1),
            SetForegroundColor(theme.info),
            Print(description),
        )?;
    }

    let controls_y = 5 + app.puzzles.len() as u16 * 2;
    execute!(
        stdout,
        MoveTo(x, controls_y),
        SetForegroundColor(theme.key),
        Print("j/k"),
        SetForegroundColor(theme.info),
        Print(" move  "),
        SetForegroundColor(theme.key),
        Print("Enter"),
        SetForegroundColor(theme.info),
        Print(" play  "),
        SetForegroundColor(theme.key),
        Print("t"),
        SetForegroundColor(theme.info),
        Print(" theme  "),
        SetForegroundColor(theme.key),
        Print("q"),
        SetForegroundColor(theme.info),
        Print(" quit"),
    )?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }
    Ok(())
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    _term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let Some(game) = app.game.as_ref() else {
        return Ok(());
    };
    let puzzle = game.puzzle();
    let session = game.session();
    let x = 2;
    let y = 1;

    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print(&puzzle.title),
        SetForegroundColor(theme.difficulty_color(puzzle.difficulty)),
        Print(format!("  [{}]", puzzle.difficulty)),
        SetForegroundColor(theme.info),
        Print(format!("  {}", game.elapsed_string())),
    )?;

    let grid_y = y + 2;
    render_grid(stdout, app, session, x, grid_y)?;

    let grid_width = puzzle.cols() as u16 * CELL_W + 1;
    let clues_x = x + grid_width + 3;
    render_clue_panel(stdout, app, game.selected_clue(), clues_x, grid_y)?;

    let grid_height = puzzle.rows() as u16 * 2 + 1;
    let controls_y = grid_y + grid_height + 1;
    execute!(
        stdout,
        MoveTo(x, controls_y),
        SetForegroundColor(theme.info),
        Print("type letters  "),
        SetForegroundColor(theme.key),
        Print("Tab"),
        SetForegroundColor(theme.info),
        Print(" next  "),
        SetForegroundColor(theme.key),
        Print("Space"),
        SetForegroundColor(theme.info),
        Print(" direction  "),
        SetForegroundColor(theme.key),
        Print("[ ]"),
        SetForegroundColor(theme.info),
        Print(" clues  "),
        SetForegroundColor(theme.key),
        Print("1"),
        SetForegroundColor(theme.info),
        Print(" check  "),
        SetForegroundColor(theme.key),
        Print("2"),
        SetForegroundColor(theme.info),
        Print(" reveal  "),
        SetForegroundColor(theme.key),
        Print("3"),
        SetForegroundColor(theme.info),
        Print(" clear  "),
        SetForegroundColor(theme.key),
        Print("4"),
        SetForegroundColor(theme.info),
        Print(" submit  "),
        SetForegroundColor(theme.key),
        Print("Esc"),
        SetForegroundColor(theme.info),
        Print(" back"),
    )?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }
    Ok(())
}

fn render_grid(
    stdout: &mut io::Stdout,
    app: &App,
    session: &Session,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let grid = session.grid();
    let cols = grid.first().map_or(0, Vec::len);
    let separator = format!("+{}", "----+".repeat(cols));

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.border),
        Print(&separator)
    )?;

    for (row, cells) in grid.iter().enumerate() {
        let cell_y = y + 1 + row as u16 * 2;
        execute!(stdout, MoveTo(x, cell_y))?;
        for cell in cells {
            execute!(stdout, SetForegroundColor(theme.border), Print("|"))?;
            render_cell(stdout, app, session, cell)?;
        }
        execute!(
            stdout,
            SetForegroundColor(theme.border),
            Print("|"),
            MoveTo(x, cell_y + 1),
            Print(&separator)
        )?;
    }
    Ok(())
}

fn render_cell(
    stdout: &mut io::Stdout,
    app: &App,
    session: &Session,
    cell: &Cell,
) -> io::Result<()> {
    let theme = &app.theme;

    if cell.is_black() {
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.block),
            Print("\u{2588}\u{2588}\u{2588}\u{2588}")
        )?;
        return Ok(());
    }

    let is_cursor = session.selected() == Some((cell.row, cell.col));
    let bg = if is_cursor {
        theme.selected_bg
    } else if cell.is_highlighted {
        theme.highlight_bg
    } else {
        theme.bg
    };

    // Letter color: reveal and check state win over plain input.
    let letter_fg = if cell.is_revealed {
        theme.revealed
    } else if session.was_checked(cell.row, cell.col) {
        match cell.is_correct {
            Some(true) => theme.success,
            Some(false) => theme.error,
            None => theme.filled,
        }
    } else {
        theme.filled
    };

    let number = cell
        .number
        .map_or("  ".to_string(), |n| format!("{:<2}", n));
    let letter = cell.user_input.unwrap_or(' ');

    execute!(
        stdout,
        SetBackgroundColor(bg),
        SetForegroundColor(theme.number),
        Print(number),
        SetForegroundColor(letter_fg),
        Print(format!("{} ", letter)),
        SetBackgroundColor(theme.bg),
    )?;
    Ok(())
}

fn render_clue_panel(
    stdout: &mut io::Stdout,
    app: &App,
    selected: Option<&Clue>,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let Some(game) = app.game.as_ref() else {
        return Ok(());
    };
    let session = game.session();
    let clues = &game.puzzle().clues;
    let mut line = y;

    for (header, list) in [("ACROSS", &clues.across), ("DOWN", &clues.down)] {
        execute!(
            stdout,
            MoveTo(x, line),
            SetForegroundColor(theme.fg),
            Print(header)
        )?;
        line += 1;
        for clue in list {
            // Progress marker: filled span, touched span, or untouched.
            let marker = if session.is_clue_complete(clue) {
                "\u{2713}"
            } else if session.is_clue_started(clue) {
                "\u{00b7}"
            } else {
                " "
            };
            let is_selected = selected == Some(clue);
            let fg = if is_selected { theme.key } else { theme.info };
            let text: String = clue.text.chars().take(40).collect();
            execute!(
                stdout,
                MoveTo(x, line),
                SetForegroundColor(theme.success),
                Print(marker),
                SetForegroundColor(fg),
                Print(format!(" {:>2}. {}", clue.number, text))
            )?;
            line += 1;
        }
        line += 1;
    }
    Ok(())
}

fn render_result_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let Some(game) = app.game.as_ref() else {
        return Ok(());
    };
    let Some(score) = game.score() else {
        return Ok(());
    };

    let percent = if score.total > 0 {
        score.correct * 100 / score.total
    } else {
        0
    };
    let center_y = term_height / 2;
    let title = format!("{} — solved!", game.puzzle().title);
    let summary = format!(
        "{} of {} correct ({}%) in {}",
        score.correct,
        score.total,
        percent,
        game.elapsed_string()
    );
    let verdict = if percent == 100 {
        "Perfect solve!"
    } else if percent >= 70 {
        "Well done!"
    } else {
        "Keep practicing!"
    };
    let controls = "r replay   Enter back to puzzles";

    for (dy, text, color) in [
        (0, title.as_str(), theme.fg),
        (2, summary.as_str(), theme.info),
        (4, verdict, theme.success),
        (6, controls, theme.key),
    ] {
        let x = (term_width.saturating_sub(text.chars().count() as u16)) / 2;
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            MoveTo(x, center_y - 3 + dy),
            SetForegroundColor(color),
            Print(text)
        )?;
    }
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let x = (term_width.saturating_sub(msg.chars().count() as u16 + 4)) / 2;
    execute!(
        stdout,
        MoveTo(x, 0),
        SetBackgroundColor(theme.highlight_bg),
        SetForegroundColor(theme.key),
        Print(format!("  {}  ", msg)),
        SetBackgroundColor(theme.bg),
    )?;
    Ok(())
}
