//! Word lists for the game
//!
//! Provides the embedded dictionary and the repository that draws secrets from it
//! and validates guesses against it.

mod embedded;
pub mod repository;

pub use embedded::{WORDS, WORDS_COUNT};
pub use repository::{RepositoryError, WordRepository};
