//! Snakes and Ladders TUI application.
//!
//! Six players race along a 50-square track; ladders climb, snakes descend,
//! and the first player to land exactly on the final square wins.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a text-based interface suitable for piping and
//! automated testing:
//!
//! ```bash
//! cargo run -p snakes -- --headless --seed 42 --auto
//! ```

mod app;
mod effects;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use snakes_core::{GameConfig, GameSession, SeededDie};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --headless mode
    if args.iter().any(|a| a == "--headless") {
        let opts = headless::parse_opts_from_args(&args);
        return headless::run_headless(opts).map_err(|e| e.into());
    }

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Seed and player count apply to the TUI as well
    let opts = headless::parse_opts_from_args(&args);
    let config = GameConfig::default().with_player_count(opts.players);
    let session = match opts.seed {
        Some(seed) => GameSession::with_die(config, SeededDie::new(seed)),
        None => GameSession::new(config),
    };
    let session = match session {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create game: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(session));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            // Tick animations
            app.tick();
        }
    }
}

fn print_help() {
    println!("Snakes and Ladders - dice race to square 50");
    println!();
    println!("USAGE:");
    println!("  snakes [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help        Show this help message");
    println!("  --headless        Run in headless mode (text-only, no TUI)");
    println!("  --seed <N>        Seed the die for a reproducible game");
    println!("  --players <N>     Number of players (default: 6, minimum: 2)");
    println!();
    println!("HEADLESS OPTIONS (only with --headless):");
    println!("  --auto            Play the whole game automatically");
    println!();
    println!("EXAMPLES:");
    println!("  snakes                          # Interactive TUI");
    println!("  snakes --players 2              # Two-player TUI game");
    println!("  snakes --headless               # Roll-by-roll text mode");
    println!("  snakes --headless --seed 42 --auto");
}
