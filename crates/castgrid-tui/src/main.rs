mod app;
mod loader;
mod render;
mod theme;

use anyhow::Context;
use app::App;
use castgrid_core::{Engine, PoolPolicy};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use theme::Theme;

/// Terminal front end for the 2x2 cast-guessing trivia grid.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Path to the pre-built catalog JSON. Defaults to ./catalog.json,
    /// then ./assets/catalog.json, then the platform data directory.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for puzzle selection, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Where autocomplete suggestions come from.
    #[arg(long, value_enum, default_value_t = Pool::Cell)]
    pool: Pool,

    /// Color theme.
    #[arg(short, long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pool {
    /// Only the active cell's valid answers.
    Cell,
    /// The catalog's full actor directory.
    Global,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
    HighContrast,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    debug!("command line options: {:?}", opts);

    let catalog = loader::load(opts.catalog.as_deref())?;
    let policy = match opts.pool {
        Pool::Cell => PoolPolicy::CellAnswers,
        Pool::Global => PoolPolicy::GlobalDirectory,
    };
    let mut engine = Engine::new(catalog)
        .context("invalid catalog")?
        .with_policy(policy);
    if let Some(seed) = opts.seed {
        engine = engine.with_seed(seed);
    }

    let theme = match opts.theme {
        ThemeChoice::Dark => Theme::dark(),
        ThemeChoice::Light => Theme::light(),
        ThemeChoice::HighContrast => Theme::high_contrast(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, App::new(engine, theme));

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

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
