//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, keyboard_lines, share_grid};
use crate::commands::SimulationResult;
use crate::core::{Score, Word};
use crate::game::{Game, GameStatus, MAX_ATTEMPTS, Statistics};
use colored::Colorize;
use rand::Rng;

/// Print a single scored guess
pub fn print_score_result(guess: &Word, secret: &Word, score: Score) {
    println!(
        "\n{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", colored_guess(guess, score));
    println!("  {}", score.to_emoji());
    println!(
        "  {} correct, {} present",
        score.count_correct().to_string().green(),
        score.count_present().to_string().yellow()
    );
}

/// Print every submitted row followed by the keyboard
pub fn print_board<R: Rng>(game: &Game<'_, R>) {
    println!();
    for (i, (guess, score)) in game.guesses().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(&guess, score)
        );
    }

    println!();
    for (indent, line) in keyboard_lines(game.feedback()).iter().enumerate() {
        println!("  {}{line}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-game banner and share grid
pub fn print_game_over<R: Rng>(game: &Game<'_, R>) {
    println!("{}", "═".repeat(50).bright_cyan());
    match game.status() {
        GameStatus::Won => {
            let attempts = game.attempts_used();
            println!(
                "  {}",
                format!(
                    "🎉 Congrats! You got it right in {attempts} attempt{}!",
                    if attempts == 1 { "" } else { "s" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "  {} The word was {}.",
                "Too bad. Try again!".red().bold(),
                game.secret().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());
    println!("\n{}\n", share_grid(game));
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
    print_distribution(&stats.guess_distribution, stats.games_won);
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let stats = &result.statistics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    if let Some(average) = stats.average_guesses() {
        println!("   Average guesses:  {average:.2} (wins only)");
    }
    println!("   Losses:           {}", stats.games_lost().to_string().red());
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    print_distribution(&stats.guess_distribution, stats.games_won);
}

fn print_distribution(distribution: &[usize; MAX_ATTEMPTS + 1], wins: usize) {
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in distribution.iter().enumerate().skip(1) {
        let pct = if wins == 0 {
            0.0
        } else {
            count as f64 / wins as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
