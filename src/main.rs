//! Worddd - CLI
//!
//! Five-letter word guessing game with TUI and console modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use worddd::{
    commands::{SimulationConfig, run_simple, run_simulation, score_words},
    core::Word,
    game::Game,
    interactive::{App, run_tui},
    logging,
    output::{print_score_result, print_simulation_result, print_statistics},
    wordlists::WordRepository,
};

#[derive(Parser)]
#[command(
    name = "worddd",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: the embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Fix the first game's secret word
        #[arg(long)]
        secret: Option<String>,
    },

    /// Line-based console mode
    Simple {
        /// Fix the first game's secret word
        #[arg(long)]
        secret: Option<String>,
    },

    /// Score one guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Let a bot play many seeded games
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn load_repository(path: Option<&PathBuf>) -> Result<WordRepository> {
    let repo = match path {
        Some(path) => WordRepository::load_from_file(path)
            .with_context(|| format!("could not load word list {}", path.display()))?,
        None => WordRepository::embedded().context("embedded word list is empty")?,
    };
    debug!(words = repo.len(), "word list loaded");
    Ok(repo)
}

fn build_game<'a>(
    repo: &'a WordRepository,
    seed: Option<u64>,
    secret: Option<&str>,
) -> Result<Game<'a>> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let Some(secret) = secret else {
        return Ok(Game::with_rng(repo, rng));
    };

    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    if !repo.contains_word(&secret) {
        bail!("secret '{secret}' is not in the word list");
    }
    Ok(Game::with_secret(repo, rng, secret))
}

fn main() -> Result<()> {
    logging::init("warn");

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { secret: None });

    match command {
        Commands::Play { secret } => {
            let repo = load_repository(cli.wordlist.as_ref())?;
            let game = build_game(&repo, cli.seed, secret.as_deref())?;
            let stats = run_tui(App::new(game))?;
            if stats.total_games > 0 {
                print_statistics(&stats);
            }
            Ok(())
        }
        Commands::Simple { secret } => {
            let repo = load_repository(cli.wordlist.as_ref())?;
            let mut game = build_game(&repo, cli.seed, secret.as_deref())?;
            run_simple(&mut game, io::stdin().lock())?;
            Ok(())
        }
        Commands::Score { guess, secret } => {
            let result = score_words(&guess, &secret)?;
            print_score_result(&result.guess, &result.secret, result.score);
            Ok(())
        }
        Commands::Simulate { count } => {
            let repo = load_repository(cli.wordlist.as_ref())?;
            let config = SimulationConfig {
                games: count,
                seed: cli.seed.unwrap_or_else(rand::random),
                show_progress: true,
            };
            println!("Simulating {count} games with seed {}...", config.seed);
            let result = run_simulation(&repo, &config);
            print_simulation_result(&result);
            Ok(())
        }
    }
}
