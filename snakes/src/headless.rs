//! Headless mode for the game.
//!
//! A simple line-oriented interface for running games without a TUI,
//! suitable for piping and automated testing:
//! - an empty line, `roll`, or `r` rolls for the current player
//! - lines starting with `#` are commands (status, reset, auto, quit)

use std::io::{self, BufRead, Write};

use snakes_core::{ConfigError, GameConfig, GameSession, SeededDie, TurnOutcome, TurnRecord};

/// Turn cap for auto-play, so a pathological table cannot spin forever.
const AUTO_PLAY_TURN_CAP: usize = 10_000;

/// Options for a headless run.
#[derive(Debug, Clone)]
pub struct HeadlessOpts {
    /// Seed for a reproducible game; None uses the thread RNG.
    pub seed: Option<u64>,
    /// Number of players.
    pub players: usize,
    /// Play the whole game automatically and exit.
    pub auto: bool,
}

impl Default for HeadlessOpts {
    fn default() -> Self {
        Self {
            seed: None,
            players: snakes_core::CLASSIC_PLAYERS,
            auto: false,
        }
    }
}

/// Parse headless options from command line arguments.
pub fn parse_opts_from_args(args: &[String]) -> HeadlessOpts {
    let mut opts = HeadlessOpts::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                if let Some(seed) = args.get(i + 1).and_then(|s| s.parse().ok()) {
                    opts.seed = Some(seed);
                    i += 1;
                }
            }
            "--players" => {
                if let Some(players) = args.get(i + 1).and_then(|s| s.parse().ok()) {
                    opts.players = players;
                    i += 1;
                }
            }
            "--auto" => {
                opts.auto = true;
            }
            _ => {}
        }
        i += 1;
    }

    opts
}

/// Run the game in headless mode.
pub fn run_headless(opts: HeadlessOpts) -> Result<(), ConfigError> {
    let config = GameConfig::default().with_player_count(opts.players);
    let mut game = match opts.seed {
        Some(seed) => GameSession::with_die(config, SeededDie::new(seed))?,
        None => GameSession::new(config)?,
    };
    game.set_win_hook(|player| println!("[CELEBRATE] *** Player {} takes the crown! ***", player + 1));

    println!("=== Snakes and Ladders (headless) ===");
    println!(
        "{} players on a {}-square board. Reach {} exactly to win.",
        game.player_count(),
        game.board().size(),
        game.board().size()
    );
    print_commands();
    println!();

    if opts.auto {
        auto_play(&mut game);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_prompt(&game, &mut stdout);
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };
        let line = line.trim();

        if let Some(command) = line.strip_prefix('#') {
            match command.split_whitespace().next() {
                Some("quit") | Some("exit") => {
                    println!("Goodbye!");
                    break;
                }
                Some("status") => print_status(&game),
                Some("reset") => {
                    game.reset();
                    println!("[RESET] Everyone back to square 1. Player 1 to roll.");
                }
                Some("auto") => auto_play(&mut game),
                Some("help") => print_commands(),
                _ => println!("[ERROR] Unknown command. Type #help for help."),
            }
        } else if line.is_empty() || line == "roll" || line == "r" {
            take_turn(&mut game);
        } else {
            println!("[ERROR] Press Enter to roll, or type #help for commands.");
        }

        if !game.is_over() {
            print_prompt(&game, &mut stdout);
        }
    }

    Ok(())
}

fn print_commands() {
    println!("Commands:");
    println!("  <Enter>   - Roll for the current player");
    println!("  #status   - Show every player's position");
    println!("  #reset    - Start a new game");
    println!("  #auto     - Play the rest of the game automatically");
    println!("  #quit     - Exit");
    println!("  #help     - Show this help");
}

fn print_prompt(game: &GameSession, stdout: &mut impl Write) {
    print!("Player {} > ", game.current_player() + 1);
    stdout.flush().ok();
}

fn print_status(game: &GameSession) {
    println!("[STATUS]");
    for (player, position) in game.positions().iter().enumerate() {
        let turn = if game.winner() == Some(player) {
            "  (winner)"
        } else if player == game.current_player() && !game.is_over() {
            "  (to roll)"
        } else {
            ""
        };
        println!("  Player {}: square {position}{turn}", player + 1);
    }
}

fn take_turn(game: &mut GameSession) {
    match game.roll() {
        Ok(record) => print_turn(&record),
        Err(e) => println!("[ERROR] {e}"),
    }
}

fn print_turn(record: &TurnRecord) {
    let tag = match record.outcome {
        TurnOutcome::Moved { .. } => "MOVE",
        TurnOutcome::Climbed { .. } => "LADDER",
        TurnOutcome::Descended { .. } => "SNAKE",
        TurnOutcome::Overshot { .. } => "SKIP",
        TurnOutcome::Won { .. } => "WIN",
    };
    println!(
        "[ROLL] Player {} rolled a {}",
        record.outcome.player() + 1,
        record.rolled
    );
    println!("[{tag}] {}", record.outcome.describe());
}

fn auto_play(game: &mut GameSession) {
    for _ in 0..AUTO_PLAY_TURN_CAP {
        if game.is_over() {
            break;
        }
        take_turn(game);
    }
    if !game.is_over() {
        println!("[ERROR] No winner after {AUTO_PLAY_TURN_CAP} turns; giving up.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opts() {
        let args: Vec<String> = ["snakes", "--headless", "--seed", "99", "--players", "3", "--auto"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let opts = parse_opts_from_args(&args);
        assert_eq!(opts.seed, Some(99));
        assert_eq!(opts.players, 3);
        assert!(opts.auto);
    }

    #[test]
    fn test_parse_opts_defaults() {
        let args: Vec<String> = vec!["snakes".to_string()];
        let opts = parse_opts_from_args(&args);
        assert_eq!(opts.seed, None);
        assert_eq!(opts.players, 6);
        assert!(!opts.auto);
    }

    #[test]
    fn test_seeded_auto_play_finishes() {
        let config = GameConfig::default().with_player_count(2);
        let mut game = GameSession::with_die(config, SeededDie::new(7)).unwrap();
        auto_play(&mut game);
        assert!(game.is_over());
    }
}
