//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, LetterStatus, Score, Word};
use crate::game::{Game, GameStatus, KEYBOARD_ROWS, Key, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};
use rand::Rng;

/// Paint one letter tile according to its status
#[must_use]
pub fn paint_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, score: Score) -> String {
    guess
        .text()
        .chars()
        .zip(score.statuses())
        .map(|(letter, &status)| paint_tile(letter, Some(status)).to_string())
        .collect()
}

/// Keyboard rows colored by best-known letter status
#[must_use]
pub fn keyboard_lines(feedback: &LetterFeedback) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|key| match *key {
                    Key::Letter(letter) => {
                        Some(paint_tile(char::from(letter), feedback.get(letter)).to_string())
                    }
                    _ => None,
                })
                .collect()
        })
        .collect()
}

/// Spoiler-free result grid, e.g. "Worddd 3/6" followed by one emoji row per guess
#[must_use]
pub fn share_grid<R: Rng>(game: &Game<'_, R>) -> String {
    let attempts = match game.status() {
        GameStatus::Won => game.attempts_used().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };

    let mut grid = format!("Worddd {attempts}/{MAX_ATTEMPTS}\n");
    for (_, score) in game.guesses() {
        grid.push('\n');
        grid.push_str(&score.to_emoji());
    }
    grid
}

/// Uppercase the first letter of a message
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
