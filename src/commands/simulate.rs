//! Simulate command
//!
//! A simple bot plays many seeded games in parallel. Each game is owned by a
//! single rayon worker, so the state machine still sees one event at a time.

use crate::core::{Score, Word};
use crate::game::{Game, GameStatus, Key, Statistics};
use crate::wordlists::WordRepository;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Mixed into the game seed so the bot and the secret draw differ
const BOT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedGame {
    pub secret: String,
    pub status: GameStatus,
    pub attempts: usize,
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: Vec<SimulatedGame>,
    pub statistics: Statistics,
    pub seed: u64,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Whether `candidate` could be the secret given every scored guess so far
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[(Word, Score)]) -> bool {
    history
        .iter()
        .all(|(guess, score)| Score::calculate(guess, candidate) == *score)
}

/// Play one game: the bot always guesses a random word consistent with the feedback
#[must_use]
pub fn play_bot_game(repo: &WordRepository, seed: u64) -> SimulatedGame {
    let mut game = Game::seeded(repo, seed);
    let mut bot_rng = StdRng::seed_from_u64(seed ^ BOT_SEED_SALT);

    while !game.status().is_finished() {
        let history: Vec<(Word, Score)> = game.guesses().collect();
        let candidates: Vec<&Word> = repo
            .words()
            .iter()
            .filter(|word| is_consistent(word, &history))
            .collect();

        let Some(&guess) = candidates.choose(&mut bot_rng) else {
            warn!(seed, "no consistent candidate left");
            break;
        };

        for &letter in guess.chars() {
            // Letters never fail; only Enter can be rejected
            let _ = game.handle_key(Key::Letter(letter));
        }
        if let Err(err) = game.handle_key(Key::Enter) {
            warn!(seed, guess = %guess, %err, "bot guess rejected");
            break;
        }
    }

    SimulatedGame {
        secret: game.secret().text().to_string(),
        status: game.status(),
        attempts: game.attempts_used(),
    }
}

/// Run `config.games` bot games in parallel
///
/// Game `i` is seeded with `config.seed + i`, so a run is fully reproducible.
#[must_use]
pub fn run_simulation(repo: &WordRepository, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("simulating");

    let games: Vec<SimulatedGame> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let result = play_bot_game(repo, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("done");

    let mut statistics = Statistics::default();
    for game in &games {
        statistics.record(game.status, game.attempts);
    }

    let duration = start.elapsed();
    debug!(
        games = games.len(),
        won = statistics.games_won,
        elapsed_ms = duration.as_millis(),
        "simulation finished"
    );

    SimulationResult {
        games,
        statistics,
        seed: config.seed,
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
