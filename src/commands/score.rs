//! Score command
//!
//! Scores one guess against a chosen secret without playing a game.

use crate::core::{Score, Word};
use anyhow::{Context, Result};

/// A guess scored against a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub score: Score,
}

/// Score `guess` against `secret`
///
/// Neither word has to be in the dictionary, only well-formed.
///
/// # Errors
///
/// Returns an error if either argument is not a five-letter word.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let score = Score::calculate(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        score,
    })
}
