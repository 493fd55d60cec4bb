//! Guess scoring against the secret word
//!
//! A `Score` holds one [`LetterStatus`] per position. Scoring is duplicate-aware:
//! every letter of the secret is credited to at most one letter of the guess.

use super::word::WORD_LENGTH;
use super::{LetterStatus, Word};
use std::fmt;

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score([LetterStatus; WORD_LENGTH]);

impl Score {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Score `attempt` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: every exact position match is `Correct` and consumes that
    ///    secret position.
    /// 2. Second pass: every remaining attempt letter takes the leftmost
    ///    unconsumed secret position holding the same letter (`Present`),
    ///    otherwise it is `Absent`.
    ///
    /// Exact matches are resolved before any `Present` credit is handed out, so a
    /// repeated letter that is already placed correctly cannot be counted twice.
    ///
    /// # Examples
    /// ```
    /// use worddd::core::{LetterStatus::*, Score, Word};
    ///
    /// let attempt = Word::new("llama").unwrap();
    /// let secret = Word::new("allow").unwrap();
    ///
    /// let score = Score::calculate(&attempt, &secret);
    /// assert_eq!(score.statuses(), &[Present, Correct, Present, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(attempt: &Word, secret: &Word) -> Self {
        let guess = attempt.chars();
        let target = secret.chars();
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: index needed to address guess[i], target[i] and both status arrays
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                statuses[i] = LetterStatus::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }

            let available = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]);
            if let Some(j) = available {
                statuses[i] = LetterStatus::Present;
                consumed[j] = true;
            }
        }

        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(self) -> usize {
        self.count(LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_present(self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as a row of colored squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    /// Parse a score from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let statuses: Vec<LetterStatus> = s
            .trim()
            .chars()
            .map(LetterStatus::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid score string: {s}"))?;

        let statuses: [LetterStatus; WORD_LENGTH] = statuses
            .try_into()
            .map_err(|_| format!("Score must have {WORD_LENGTH} symbols: {s}"))?;

        Ok(Self(statuses))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
