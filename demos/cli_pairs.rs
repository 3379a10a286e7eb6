//! Hot-seat pairs game for two players sharing one terminal.
//!
//! Run with `cargo run --example cli_pairs -- 6` to play with six pairs, and
//! set `RUST_LOG=pairs=debug` to watch the engine's decisions.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pairs::{Face, Game, GameOptions, MAX_PAIRS, Snapshot, TurnResult};

const PLAYER_COLORS: [&str; 2] = ["36", "35"];

fn main() {
    env_logger::init();

    let pairs = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(MAX_PAIRS);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let game = match Game::new(GameOptions::default().with_pairs(pairs), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Cannot start a game: {err}");
            return;
        }
    };

    println!("Pairs CLI example with {pairs} pairs (type 'q' to quit)");

    while !game.is_over() {
        let snapshot = game.snapshot();
        print_board(&snapshot);

        let player = snapshot.current_player;
        let prompt = format!("{} picks a card: ", player_label(player));
        let Some(index) = prompt_usize(&prompt) else {
            println!("Goodbye.");
            return;
        };

        match game.turn_card(index, player) {
            Ok(result) => report(&result, snapshot.turned.as_ref()),
            Err(err) => println!("Pick rejected: {err}"),
        }
    }

    let snapshot = game.snapshot();
    print_board(&snapshot);
    if let Some(winner) = game.winner() {
        println!("{} found the last pair and wins!", player_label(winner));
    }
}

fn report(result: &TurnResult, first: Option<&(Face, usize)>) {
    if !result.turn_complete {
        println!("Turned over {}.", result.card);
        return;
    }

    let first = first.map_or_else(String::new, |(face, index)| format!("{face} (#{index})"));
    if result.match_found {
        println!(
            "{} matches {first}! {} now has {}.",
            result.card,
            player_label(result.player),
            result.new_score
        );
    } else {
        println!(
            "{} does not match {first}. {} is up.",
            result.card,
            player_label(result.next_turn_player)
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a card number."),
        }
    }
}

fn print_board(snapshot: &Snapshot) {
    println!();
    for (index, solved) in snapshot.solved_cards.iter().enumerate() {
        let cell = match (solved, &snapshot.turned) {
            (Some(face), _) => colorize(&format!("{face:>18}"), "90"),
            (None, Some((face, turned))) if *turned == index => {
                colorize(&format!("{face:>18}"), "33")
            }
            (None, _) => format!("{:>18}", format!("#{index}")),
        };
        print!("{cell}");
        if index % 4 == 3 {
            println!();
        }
    }
    if snapshot.solved_cards.len() % 4 != 0 {
        println!();
    }

    let [first, second] = snapshot.scores;
    println!(
        "\n{}: {first}   {}: {second}\n",
        player_label(0),
        player_label(1)
    );
}

fn player_label(player: u8) -> String {
    let code = PLAYER_COLORS[usize::from(player) % PLAYER_COLORS.len()];
    colorize(&format!("Player {}", player + 1), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
