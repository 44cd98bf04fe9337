use crate::app::{App, ScreenState};
use crate::theme::Theme;
use castgrid_core::{CellState, GridSession};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;

/// Width of the left header column
const LEFT_COL: usize = 20;
/// Width of each playable column
const CELL_COL: usize = 26;
/// Maximum suggestions shown below the input line
const MAX_SUGGESTIONS: usize = 8;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    match app.screen {
        ScreenState::Instructions => render_instructions(stdout, app, term_width, term_height)?,
        ScreenState::Playing => render_game_screen(stdout, app, term_width)?,
        ScreenState::Victory => {
            render_game_screen(stdout, app, term_width)?;
            render_victory_overlay(stdout, app, term_width, term_height)?;
        }
    }

    execute!(stdout, Show)?;
    Ok(())
}

/// Pad or truncate to exactly `width` display characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        text.chars().take(width.saturating_sub(1)).collect::<String>() + "…"
    } else {
        format!("{:^width$}", text, width = width)
    }
}

fn render_instructions(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let lines = [
        "CASTGRID",
        "",
        "Two shows across the top, two down the side.",
        "Fill every intersection with an actor who appears in both.",
        "",
        "Move with the arrow keys, press Enter to answer a cell,",
        "type a name and pick a suggestion or press Enter to submit.",
        "Wrong guesses stay on the board; try again as often as you like.",
        "",
        "Press Enter to start, q to quit.",
    ];

    let start_y = (term_height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        let x = (term_width / 2).saturating_sub(line.chars().count() as u16 / 2);
        let color = if i == 0 { theme.header } else { theme.fg };
        execute!(
            stdout,
            MoveTo(x, start_y + i as u16),
            SetForegroundColor(color),
            Print(line)
        )?;
    }
    Ok(())
}

fn render_game_screen(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<()> {
    let Some(session) = app.engine.session() else {
        return Ok(());
    };
    let theme = &app.theme;

    let grid_width = (LEFT_COL + 2 * CELL_COL + 4) as u16;
    let x = if term_width > grid_width {
        (term_width - grid_width) / 2
    } else {
        1
    };
    let mut y = 1;

    // Title and timer
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.header),
        Print("CASTGRID"),
        SetForegroundColor(theme.info),
        Print(format!("  {}", session.timer().format()))
    )?;
    y += 2;

    y = render_grid(stdout, app, session, x, y)?;
    y += 1;

    if app.editing.is_some() {
        y = render_input(stdout, app, x, y)?;
    }

    if app.show_solution {
        y = render_solution(stdout, app, session, x, y)?;
    }

    if let Some(ref msg) = app.message {
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.key),
            Print(msg)
        )?;
        y += 1;
    }

    execute!(
        stdout,
        MoveTo(x, y + 1),
        SetForegroundColor(theme.info),
        Print("arrows: move  Enter: answer  n: new grid  q: quit")
    )?;
    Ok(())
}

fn border_line(theme: &Theme) -> (String, Color) {
    let line = format!(
        "+{}+{}+{}+",
        "-".repeat(LEFT_COL),
        "-".repeat(CELL_COL),
        "-".repeat(CELL_COL)
    );
    (line, theme.border)
}

fn cell_color(theme: &Theme, state: CellState) -> Color {
    match state {
        CellState::Empty => theme.fg,
        CellState::Editing => theme.editing,
        CellState::Correct => theme.correct,
        CellState::Incorrect => theme.incorrect,
    }
}

fn render_grid(
    stdout: &mut io::Stdout,
    app: &App,
    session: &GridSession,
    x: u16,
    mut y: u16,
) -> io::Result<u16> {
    let theme = &app.theme;
    let puzzle = session.puzzle();
    let (border, border_color) = border_line(theme);

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(border_color),
        Print(&border)
    )?;
    y += 1;

    // Header row: blank corner plus the two top shows
    execute!(stdout, MoveTo(x, y), Print("|"))?;
    execute!(stdout, Print(fit("", LEFT_COL)), Print("|"))?;
    for show in &puzzle.top_shows {
        execute!(
            stdout,
            SetForegroundColor(theme.header),
            Print(fit(show, CELL_COL)),
            SetForegroundColor(border_color),
            Print("|")
        )?;
    }
    y += 1;

    for (row, left_show) in puzzle.left_shows.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(border_color),
            Print(&border)
        )?;
        y += 1;

        execute!(stdout, MoveTo(x, y), Print("|"))?;
        execute!(
            stdout,
            SetForegroundColor(theme.header),
            Print(fit(left_show, LEFT_COL)),
            SetForegroundColor(border_color),
            Print("|")
        )?;

        for col in 0..2 {
            let index = row * 2 + col;
            let cell = &session.cells()[index];
            let selected = app.cursor == index && app.screen == ScreenState::Playing;

            let text = match cell.state {
                CellState::Empty => String::new(),
                CellState::Editing => format!("{}_", app.input),
                _ => cell.text.clone(),
            };

            if selected {
                execute!(stdout, SetBackgroundColor(theme.selected_bg))?;
            }
            execute!(
                stdout,
                SetForegroundColor(cell_color(theme, cell.state)),
                Print(fit(&text, CELL_COL))
            )?;
            if selected {
                execute!(stdout, SetBackgroundColor(theme.bg))?;
            }
            execute!(stdout, SetForegroundColor(border_color), Print("|"))?;
        }
        y += 1;
    }

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(border_color),
        Print(&border)
    )?;
    Ok(y + 1)
}

fn render_input(stdout: &mut io::Stdout, app: &App, x: u16, mut y: u16) -> io::Result<u16> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print("Actor: "),
        SetForegroundColor(theme.editing),
        Print(format!("{}_", app.input))
    )?;
    y += 1;

    for (i, suggestion) in app.suggestions.iter().take(MAX_SUGGESTIONS).enumerate() {
        let highlighted = app.suggestion_sel == Some(i);
        if highlighted {
            execute!(stdout, SetBackgroundColor(theme.selected_bg))?;
        }
        execute!(
            stdout,
            MoveTo(x + 2, y),
            SetForegroundColor(if highlighted { theme.fg } else { theme.info }),
            Print(suggestion)
        )?;
        if highlighted {
            execute!(stdout, SetBackgroundColor(theme.bg))?;
        }
        y += 1;
    }
    Ok(y + 1)
}

fn render_solution(
    stdout: &mut io::Stdout,
    app: &App,
    session: &GridSession,
    x: u16,
    mut y: u16,
) -> io::Result<u16> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.header),
        Print("Solution")
    )?;
    y += 1;

    for (cell, answers) in session.puzzle().cells.iter().zip(session.solution()) {
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.info),
            Print(format!("{} x {}: ", cell.top, cell.left)),
            SetForegroundColor(theme.fg),
            Print(answers.join(", "))
        )?;
        y += 1;
    }
    Ok(y + 1)
}

fn render_victory_overlay(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let time = app
        .final_time
        .map(castgrid_core::format_time)
        .unwrap_or_else(|| "00:00".to_string());

    let lines = [
        "+----------------------------------+".to_string(),
        "|            You did it!           |".to_string(),
        format!("|           Time: {}            |", time),
        "|                                  |".to_string(),
        "|  Enter: play again      q: quit  |".to_string(),
        "+----------------------------------+".to_string(),
    ];

    let x = (term_width / 2).saturating_sub(lines[0].chars().count() as u16 / 2);
    let start_y = (term_height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, start_y + i as u16),
            SetForegroundColor(theme.correct),
            Print(line)
        )?;
    }
    Ok(())
}
