//! Basic example of driving the grid engine without a UI

use castgrid_core::{Command, Engine, GridCell, PuzzleCatalog, PuzzleDefinition, SessionEvent};
use std::collections::HashMap;

fn main() {
    let catalog = build_catalog();

    println!("Starting a session on a {}-grid catalog...\n", catalog.len());
    let mut engine = Engine::new(catalog)
        .expect("catalog should validate")
        .with_seed(42);

    engine.apply(Command::StartSession).expect("start");
    let session = engine.session().expect("session is active");
    let puzzle = session.puzzle();
    println!(
        "Top shows:  {} | {}",
        puzzle.top_shows[0], puzzle.top_shows[1]
    );
    println!(
        "Left shows: {} | {}\n",
        puzzle.left_shows[0], puzzle.left_shows[1]
    );

    // A wrong guess stays on the board
    report(&mut engine, Command::Submit { index: 0, text: "Nobody Famous".into() });

    // Autocomplete while editing cell 0
    engine.apply(Command::BeginEdit { index: 0 }).expect("edit");
    report(&mut engine, Command::UpdateQuery { index: 0, text: "li".into() });

    // Picking a suggestion submits it
    report(&mut engine, Command::SelectSuggestion { index: 0, actor: "Lisa Kudrow".into() });

    // The reveal keyword shows the solution without touching state
    report(&mut engine, Command::Submit { index: 1, text: "showans".into() });

    // Finish the grid
    report(&mut engine, Command::Submit { index: 1, text: "Michael Richards".into() });
    report(&mut engine, Command::Submit { index: 2, text: "bruce willis".into() });
    report(&mut engine, Command::Submit { index: 3, text: "Jason Alexander".into() });

    let session = engine.session().expect("session is active");
    println!(
        "\nSolved {}/4 in {}",
        session.solved_count(),
        session.timer().format()
    );
}

fn report(engine: &mut Engine, command: Command) {
    println!("-> {:?}", command);
    match engine.apply(command) {
        Ok(events) => {
            for event in events {
                match event {
                    SessionEvent::CellStateChanged { index, state, text } => {
                        println!("   cell {} is now {:?} ({:?})", index, state, text)
                    }
                    SessionEvent::SuggestionsUpdated { candidates, .. } => {
                        println!("   suggestions: {:?}", candidates)
                    }
                    SessionEvent::GameComplete { elapsed_secs } => {
                        println!("   complete after {}s!", elapsed_secs)
                    }
                    SessionEvent::SolutionRevealed => println!("   solution revealed"),
                    SessionEvent::TimerTick { elapsed_secs } => {
                        println!("   timer at {}s", elapsed_secs)
                    }
                }
            }
        }
        Err(e) => println!("   error: {}", e),
    }
}

fn build_catalog() -> PuzzleCatalog {
    let cell = |top: &str, left: &str| GridCell {
        top: top.to_string(),
        left: left.to_string(),
    };
    let names = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();

    let mut intersections = HashMap::new();
    intersections.insert("Friends-Mad About You".to_string(), names(&["Lisa Kudrow"]));
    intersections.insert(
        "Seinfeld-Mad About You".to_string(),
        names(&["Michael Richards"]),
    );
    intersections.insert("Friends-Moonlighting".to_string(), names(&["Bruce Willis"]));
    intersections.insert(
        "Seinfeld-Moonlighting".to_string(),
        names(&["Jason Alexander"]),
    );

    PuzzleCatalog {
        grids: vec![PuzzleDefinition {
            top_shows: ["Friends".to_string(), "Seinfeld".to_string()],
            left_shows: ["Mad About You".to_string(), "Moonlighting".to_string()],
            cells: [
                cell("Friends", "Mad About You"),
                cell("Seinfeld", "Mad About You"),
                cell("Friends", "Moonlighting"),
                cell("Seinfeld", "Moonlighting"),
            ],
        }],
        actors: names(&[
            "Lisa Kudrow",
            "Michael Richards",
            "Bruce Willis",
            "Jason Alexander",
        ]),
        intersections,
    }
}
