//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: every line is one guess.

use crate::core::WORD_LENGTH;
use crate::game::{Game, Statistics};
use crate::output::formatters::capitalize;
use crate::output::{print_board, print_game_over, print_statistics};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the line-based game until `:quit` or end of input
///
/// Each guess is fed to the game key by key, exactly as the TUI does, followed
/// by `enter`. Rejected guesses are reported and the row is cleared.
///
/// Returns the statistics for the session.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R: Rng, I: BufRead>(game: &mut Game<'_, R>, input: I) -> Result<Statistics> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Worddd - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden five-letter word in six tries.");
    println!("Commands: ':new' for a new game, ':quit' to exit\n");

    let mut stats = Statistics::default();
    let mut lines = input.lines();

    loop {
        prompt(game)?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?.trim().to_lowercase();

        match line.as_str() {
            "" => continue,
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if game.status().is_finished() {
            println!("Game over. Type ':new' to play again or ':quit' to exit.\n");
            continue;
        }

        if line.chars().count() > WORD_LENGTH {
            println!("{}\n", "Too many letters!".red());
            continue;
        }

        if submit_line(game, &line) {
            print_board(game);

            if game.status().is_finished() {
                stats.record(game.status(), game.attempts_used());
                print_game_over(game);
                print_statistics(&stats);
                println!("\nType ':new' to play again or ':quit' to exit.\n");
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Type `line` into the game and press enter; returns whether a row was scored
fn submit_line<R: Rng>(game: &mut Game<'_, R>, line: &str) -> bool {
    for ch in line.chars() {
        // Letter and unknown codes never fail
        let _ = game.handle_code(&ch.to_string());
    }

    match game.handle_code("enter") {
        Ok(scored) => scored.is_some(),
        Err(err) => {
            debug!(%err, "guess rejected");
            println!("❌ {}\n", capitalize(&err.to_string()).red());
            while game.delete() {}
            false
        }
    }
}

fn prompt<R: Rng>(game: &Game<'_, R>) -> Result<()> {
    if game.status().is_finished() {
        print!("> ");
    } else {
        print!("Guess {}/{}: ", game.cursor().row + 1, crate::game::MAX_ATTEMPTS);
    }
    io::stdout().flush()?;
    Ok(())
}
