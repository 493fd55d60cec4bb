//! Worddd
//!
//! A five-letter word guessing game: six tries, letter-by-letter feedback,
//! and a keyboard that remembers the best status seen for every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use worddd::core::{LetterStatus, Score, Word};
//! use worddd::game::{Game, GameStatus};
//! use worddd::wordlists::WordRepository;
//!
//! // Score a guess directly
//! let guess = Word::new("llama").unwrap();
//! let secret = Word::new("allow").unwrap();
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!(score.statuses()[1], LetterStatus::Correct);
//!
//! // Or play a seeded game key by key
//! let repo = WordRepository::embedded().unwrap();
//! let mut game = Game::seeded(&repo, 42);
//! for code in ["c", "r", "a", "n", "e", "enter"] {
//!     game.handle_code(code).unwrap();
//! }
//! assert_eq!(game.attempts_used(), 1);
//! assert_ne!(game.status(), GameStatus::Lost);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
