//! Core domain types for the game
//!
//! Words, per-letter statuses, guess scoring and keyboard feedback aggregation.
//! Everything here is pure and deterministic.

mod feedback;
mod score;
mod status;
mod word;

pub use feedback::LetterFeedback;
pub use score::Score;
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
