//! Best-known status per letter across all scored guesses
//!
//! Drives keyboard coloring: once a letter has been seen as `Correct` it stays
//! `Correct`, no matter what later guesses report for it.

use super::{LetterStatus, Score, Word};
use rustc_hash::FxHashMap;

/// Mapping from letter (`b'a'..=b'z'`) to its best observed status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFeedback {
    letters: FxHashMap<u8, LetterStatus>,
}

impl LetterFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into a fresh map
    ///
    /// Each letter ends up with `max(existing, observed)`; the receiver is left
    /// untouched so callers can compare old and new maps.
    ///
    /// # Examples
    /// ```
    /// use worddd::core::{LetterFeedback, LetterStatus, Score, Word};
    ///
    /// let secret = Word::new("allow").unwrap();
    /// let guess = Word::new("llama").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// let feedback = LetterFeedback::new().merge(&guess, score);
    /// assert_eq!(feedback.get(b'l'), Some(LetterStatus::Correct));
    /// assert_eq!(feedback.get(b'a'), Some(LetterStatus::Present));
    /// assert_eq!(feedback.get(b'm'), Some(LetterStatus::Absent));
    /// ```
    #[must_use]
    pub fn merge(&self, guess: &Word, score: Score) -> Self {
        let mut letters = self.letters.clone();

        for (&letter, &status) in guess.chars().iter().zip(score.statuses()) {
            letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }

        Self { letters }
    }

    /// Best status seen for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterStatus> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters and statuses in alphabetical order
    #[must_use]
    pub fn entries(&self) -> Vec<(u8, LetterStatus)> {
        let mut entries: Vec<_> = self.letters.iter().map(|(&l, &s)| (l, s)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(guess: &str, secret: &str) -> (Word, Score) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        let score = Score::calculate(&guess, &secret);
        (guess, score)
    }

    #[test]
    fn merge_into_empty_records_every_letter() {
        let (guess, score) = scored("crane", "slate");
        let feedback = LetterFeedback::new().merge(&guess, score);

        assert_eq!(feedback.len(), 5);
        assert_eq!(feedback.get(b'a'), Some(LetterStatus::Correct));
        assert_eq!(feedback.get(b'e'), Some(LetterStatus::Correct));
        assert_eq!(feedback.get(b'c'), Some(LetterStatus::Absent));
        assert_eq!(feedback.get(b'z'), None);
    }

    #[test]
    fn merge_does_not_mutate_input() {
        let (guess, score) = scored("crane", "slate");
        let empty = LetterFeedback::new();
        let merged = empty.merge(&guess, score);

        assert!(empty.is_empty());
        assert_ne!(empty, merged);
    }

    #[test]
    fn merge_never_downgrades() {
        // L is correct after LLAMA but only present in WORLD
        let (first, first_score) = scored("llama", "allow");
        let (second, second_score) = scored("world", "allow");

        let feedback = LetterFeedback::new()
            .merge(&first, first_score)
            .merge(&second, second_score);

        assert_eq!(feedback.get(b'l'), Some(LetterStatus::Correct));
        assert_eq!(feedback.get(b'a'), Some(LetterStatus::Present));
        assert_eq!(feedback.get(b'w'), Some(LetterStatus::Present));
        assert_eq!(feedback.get(b'm'), Some(LetterStatus::Absent));
    }

    #[test]
    fn duplicate_letter_keeps_best_status_within_one_row() {
        // Second A in LLAMA is absent but the first is present
        let (guess, score) = scored("llama", "allow");
        let feedback = LetterFeedback::new().merge(&guess, score);
        assert_eq!(feedback.get(b'a'), Some(LetterStatus::Present));
    }

    #[test]
    fn merge_is_idempotent() {
        let (guess, score) = scored("speed", "erase");
        let once = LetterFeedback::new().merge(&guess, score);
        let twice = once.merge(&guess, score);
        assert_eq!(once, twice);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let (guess, score) = scored("crane", "slate");
        let feedback = LetterFeedback::new().merge(&guess, score);
        assert_eq!(feedback.get(b'A'), Some(LetterStatus::Correct));
    }

    #[test]
    fn entries_are_alphabetical() {
        let (guess, score) = scored("crane", "slate");
        let feedback = LetterFeedback::new().merge(&guess, score);
        let letters: Vec<u8> = feedback.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(letters, b"acenr");
    }
}
